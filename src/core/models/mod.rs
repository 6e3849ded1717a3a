//! Domain models for structcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Check`] - "This artifact must exist" / "this file must contain this"
//! - [`CheckKind`] - Which of the two assertion forms a result came from
//! - [`CheckResult`] - Outcome of evaluating one check
//! - [`GroupReport`] / [`SuiteReport`] - Aggregated results of a run

mod check;
mod report;

pub use check::{Check, CheckGroup, CheckKind};
pub use report::{CheckResult, GroupReport, SuiteReport};
