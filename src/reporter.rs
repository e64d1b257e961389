//! Report formatting and printing utilities.
//!
//! This module is separate from the rule logic so the rule can be used as a
//! library without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issues::{Issue, Report};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Render issues in a cargo-style format.
///
/// Each issue is shown with:
/// - Offending text and rule name
/// - Clickable file location (path:line:col)
/// - Source code context with caret indicator
/// - The rule message as a note
///
/// followed by a summary line with the total count. Every issue is an error.
pub fn render_report(issues: &[Issue]) -> String {
    let mut out = String::new();
    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = sorted
        .iter()
        .filter_map(|i| i.line())
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        out.push_str(&format!(
            "{}: \"{}\"  {}\n",
            "error".bold().red(),
            issue.message(),
            issue.rule().to_string().dimmed().cyan()
        ));

        match (issue.line(), issue.col()) {
            (Some(line), Some(col)) => {
                out.push_str(&format!(
                    "  {} {}:{}:{}\n",
                    "-->".blue(),
                    issue.file_path(),
                    line,
                    col
                ));
            }
            _ => {
                out.push_str(&format!("  {} {}\n", "-->".blue(), issue.file_path()));
            }
        }

        if let (Some(source_line), Some(line), Some(col)) =
            (issue.source_line(), issue.line(), issue.col())
        {
            out.push_str(&format!(
                "{:>width$} {}\n",
                "",
                "|".blue(),
                width = max_line_width
            ));
            out.push_str(&format!(
                "{:>width$} {} {}\n",
                line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            ));
            // Caret pointing to the column (col is 1-based)
            // Use unicode display width for correct positioning with CJK chars and emoji
            let prefix = if col > 1 {
                source_line.chars().take(col - 1).collect::<String>()
            } else {
                String::new()
            };
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            out.push_str(&format!(
                "{:>width$} {} {:>padding$}{}\n",
                "",
                "|".blue(),
                "",
                "^".red(),
                width = max_line_width,
                padding = caret_padding
            ));
        }

        if let Some(details) = issue.details() {
            out.push_str(&format!(
                "{:>width$} {} {} {}\n",
                "",
                "=".blue(),
                "note:".bold(),
                details,
                width = max_line_width
            ));
        }

        out.push('\n'); // Empty line between issues
    }

    let total = sorted.len();
    if total > 0 {
        out.push_str(&format!(
            "\n{} {} {}\n",
            FAILURE_MARK.red(),
            total,
            if total == 1 { "problem" } else { "problems" }.red()
        ));
    }

    out
}

/// Print issues to stdout. See [`render_report`].
pub fn print_report(issues: &[Issue]) {
    print!("{}", render_report(issues));
}

/// Render the success message shown when no issues are found.
pub fn render_success(source_files: usize) -> String {
    format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    )
}

/// Print a success message when no issues are found.
///
/// Displays the number of files checked to give the user confidence
/// that the check actually ran and covered the expected scope.
pub fn print_success(source_files: usize) {
    println!("{}", render_success(source_files));
}

/// Print a warning about files that could not be parsed.
///
/// This is shown at the end of a check run when files were skipped.
pub fn print_parse_warning(parse_error_count: usize, verbose: bool) {
    if parse_error_count > 0 && !verbose {
        eprintln!(
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            parse_error_count,
            "-v".cyan()
        );
    }
}
