//! structcheck - structural validation for the FluidNC GUI Wi-Fi console
//! implementation
//!
//! This library provides the core functionality: a declarative suite of
//! file-existence and pattern-presence checks, an evaluator that runs them
//! against a base directory, and report types that render as human-readable
//! text or JSON.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod core;
pub mod output;
