//! Core domain logic for structcheck
//!
//! This module contains the check model, the evaluator, and the declarative
//! check suite.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Check, CheckKind, CheckResult, reports)
//! - `services/` - Check evaluation against the filesystem
//! - `suite` - The statically enumerated Wi-Fi console check list

pub mod models;
pub mod services;
pub mod suite;
