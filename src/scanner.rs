use std::{collections::BTreeSet, path::Path};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::parser::is_source_file;

/// Directories that are never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Result of scanning files.
pub struct ScanResult {
    /// Source files to check, sorted.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Collect JS/TS files under `paths`.
///
/// A path naming a file is taken as-is (if it has a source extension);
/// directories are walked recursively. Entries matching any `ignore_patterns`
/// glob are skipped. Invalid patterns are dropped with a warning in verbose mode.
pub fn scan_files(paths: &[String], ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    for root in paths {
        if !Path::new(root).exists() {
            skipped_count += 1;
            if verbose {
                eprintln!(
                    "{} Path does not exist: {}",
                    "warning:".bold().yellow(),
                    root
                );
            }
            continue;
        }

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if entry.file_type().is_file() && is_source_file(path) {
                files.insert(path_str.to_string());
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}
