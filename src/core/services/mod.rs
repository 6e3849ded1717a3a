//! Check evaluation services
//!
//! - [`checker`] - Run checks against a base directory on disk

pub mod checker;

pub use checker::{evaluate, run_suite};
