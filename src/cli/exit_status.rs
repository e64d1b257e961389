use std::process::ExitCode;

use crate::checker::CheckResult;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): no issues found
/// - `Failure` (1): English text or unparsable files were found
/// - `Error` (2): the run itself failed (bad options, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CheckResult) -> Self {
        if result.issues.is_empty() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
