//! Running the rule over files.
//!
//! Files are read and parsed in parallel; each file gets its own `SourceMap`
//! and swc globals, and the exemption set is shared read-only.

use std::fs;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::issues::{EnglishTextIssue, Issue, ParseErrorIssue, SourceContext, SourceLocation};
use crate::parser::parse_source;
use crate::rule::{ExemptionSet, check_program};

/// Result of checking a set of files.
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All issues, sorted by file, line and column.
    pub issues: Vec<Issue>,
    /// Number of files that were read and parsed successfully.
    pub files_checked: usize,
}

impl CheckResult {
    pub fn parse_error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, Issue::ParseError(_)))
            .count()
    }
}

/// Parse `code` and run the rule on it.
///
/// A parse failure is returned as a single `ParseError` issue.
pub fn check_source(code: String, file_path: &str, exemptions: &ExemptionSet) -> Vec<Issue> {
    let source_map = Arc::new(SourceMap::default());
    let parsed = match parse_source(code, file_path, source_map) {
        Ok(parsed) => parsed,
        Err(e) => {
            return vec![Issue::ParseError(ParseErrorIssue {
                file_path: file_path.to_owned(),
                error: e.to_string(),
            })];
        }
    };

    check_program(&parsed.program, exemptions)
        .into_iter()
        .map(|violation| {
            let loc = parsed.source_map.lookup_char_pos(violation.span.lo);
            let source_line = loc
                .file
                .get_line(loc.line - 1)
                .map(|cow| cow.to_string())
                .unwrap_or_default();

            Issue::EnglishText(EnglishTextIssue {
                context: SourceContext::new(
                    SourceLocation::new(file_path, loc.line, loc.col_display + 1),
                    source_line,
                ),
                text: violation.text,
                position: violation.position,
            })
        })
        .collect()
}

/// Read and check every file in `files`.
///
/// Unreadable or unparsable files become `ParseError` issues; they never abort the run.
pub fn check_files(files: &[String], exemptions: &ExemptionSet, verbose: bool) -> CheckResult {
    let per_file: Vec<(bool, Vec<Issue>)> = files
        .par_iter()
        .map(|file_path| {
            let content = fs::read_to_string(file_path)
                .with_context(|| format!("Failed to read file: {}", file_path));

            match content {
                Ok(code) => {
                    let issues = check_source(code, file_path, exemptions);
                    let parsed = !issues.iter().any(|i| matches!(i, Issue::ParseError(_)));
                    (parsed, issues)
                }
                Err(e) => (
                    false,
                    vec![Issue::ParseError(ParseErrorIssue {
                        file_path: file_path.clone(),
                        error: format!("{:#}", e),
                    })],
                ),
            }
        })
        .collect();

    let mut result = CheckResult::default();
    for (parsed, issues) in per_file {
        if parsed {
            result.files_checked += 1;
        }
        if verbose {
            for issue in &issues {
                if let Issue::ParseError(err) = issue {
                    eprintln!(
                        "{} {} - {}",
                        "warning:".bold().yellow(),
                        err.file_path,
                        err.error
                    );
                }
            }
        }
        result.issues.extend(issues);
    }
    result.issues.sort();
    result
}
