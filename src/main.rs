//! structcheck - structural validation for the FluidNC GUI Wi-Fi console
//! implementation
//!
//! Inspects a project tree and reports whether the Wi-Fi console artifacts
//! exist and contain the expected declarations, UI hooks, and
//! backward-compatible entry points. Nothing is compiled or executed; every
//! check is a textual pattern search.

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

mod cli;

/// Main entry point for the structcheck CLI
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
