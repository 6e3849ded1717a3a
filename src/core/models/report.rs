//! Report model
//!
//! Results of one validation run. A missing or unreadable file is a failing
//! result, never an error that aborts the run; the overall verdict is the
//! logical AND over every individual result.

use serde::Serialize;

use super::CheckKind;

/// Outcome of evaluating one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Description copied from the check
    pub description: String,
    /// The path the check targeted, relative to the base directory
    pub path: String,
    /// Which assertion form produced this result
    pub kind: CheckKind,
    /// Whether the check passed
    pub passed: bool,
    /// Read failure diagnostic, when the file could not be opened or decoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Results of one check group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    /// The group's section header
    pub title: String,
    /// Per-check results, in suite order
    pub results: Vec<CheckResult>,
}

impl GroupReport {
    /// Whether every check in this group passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}

/// Aggregated results of a full validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    /// Overall verdict: true iff every check in every group passed
    pub passed: bool,
    /// Per-group results, in suite order
    pub groups: Vec<GroupReport>,
}

impl SuiteReport {
    /// Build a report from group results, deriving the overall verdict
    #[must_use]
    pub fn new(groups: Vec<GroupReport>) -> Self {
        let passed = groups.iter().all(GroupReport::passed);
        Self { passed, groups }
    }
}
