use anyhow::Result;
use colored::Colorize;

use super::{CheckArgs, ExitStatus};
use crate::{
    checker::check_files,
    config::RuleOptions,
    reporter::{print_parse_warning, print_report, print_success},
    scanner::scan_files,
};

/// Build rule options from the command line.
///
/// `--options` JSON comes first, then every `--exclude` in order.
pub fn rule_options(args: &CheckArgs) -> Result<RuleOptions> {
    let options = match &args.options {
        Some(json) => RuleOptions::from_json(json)?,
        None => RuleOptions::default(),
    };
    Ok(options.with_excludes(args.excludes.iter().cloned()))
}

pub fn check(args: CheckArgs) -> Result<ExitStatus> {
    let options = rule_options(&args)?;
    let exemptions = options.exemption_set();

    if args.verbose && !options.excludes.is_empty() {
        eprintln!(
            "{} excluding calls matching {}",
            "note:".bold(),
            options.excludes.join(", ")
        );
    }

    let scan = scan_files(&args.paths, &args.ignores, args.verbose);
    if scan.skipped_count > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            scan.skipped_count,
            if args.verbose { "" } else { " (use -v for details)" }
        );
    }

    let result = check_files(&scan.files, &exemptions, args.verbose);

    if result.issues.is_empty() {
        print_success(result.files_checked);
    } else {
        print_report(&result.issues);
        print_parse_warning(result.parse_error_count(), args.verbose);
    }

    Ok(ExitStatus::from_result(&result))
}
