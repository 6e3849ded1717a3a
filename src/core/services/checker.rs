//! Check evaluator - runs checks against the filesystem
//!
//! Every failure mode of a single check (path missing, file unreadable,
//! pattern absent) becomes a failing [`CheckResult`]; nothing here returns
//! an error or panics, so one bad file never aborts the rest of the run.

use std::fs;
use std::path::Path;

use log::debug;

use crate::core::models::{Check, CheckGroup, CheckKind, CheckResult, GroupReport, SuiteReport};

/// Evaluate one check against a base directory
#[must_use]
pub fn evaluate(base_dir: &Path, check: &Check) -> CheckResult {
    match check {
        Check::FileExists { path, description } => CheckResult {
            description: description.clone(),
            path: path.clone(),
            kind: CheckKind::FileExists,
            passed: base_dir.join(path).exists(),
            error: None,
        },
        Check::ContentMatches {
            path,
            pattern,
            description,
        } => {
            let (passed, error) = match fs::read_to_string(base_dir.join(path)) {
                Ok(content) => (pattern.is_match(&content), None),
                Err(err) => {
                    debug!("failed to read {path}: {err}");
                    (false, Some(err.to_string()))
                },
            };
            CheckResult {
                description: description.clone(),
                path: path.clone(),
                kind: CheckKind::ContentMatches,
                passed,
                error,
            }
        },
    }
}

/// Run every group of the suite, in order, with no short-circuiting
///
/// Each check reads its own file independently; a failing check never
/// prevents later checks from running, so the report is always complete.
#[must_use]
pub fn run_suite(base_dir: &Path, groups: &[CheckGroup]) -> SuiteReport {
    let group_reports = groups
        .iter()
        .map(|group| GroupReport {
            title: group.title.clone(),
            results: group.checks.iter().map(|c| evaluate(base_dir, c)).collect(),
        })
        .collect();
    SuiteReport::new(group_reports)
}
