//! The Wi-Fi console check suite
//!
//! The suite is declarative data: a fixed list of titled groups, each a list
//! of checks, rebuilt fresh on every invocation. Nothing here touches the
//! filesystem; evaluation lives in [`crate::core::services::checker`].
//!
//! Group order matters only for report readability - every check is
//! independent and all of them always run.

use thiserror::Error;

use crate::core::models::{Check, CheckGroup};

/// Errors that can occur while building the suite
#[derive(Debug, Error)]
pub enum SuiteError {
    /// A hard-coded check pattern failed to compile
    #[error("invalid check pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern that failed to compile
        pattern: String,
        /// The underlying regex error
        source: regex::Error,
    },
}

/// Build manifest of the Tauri backend
pub const MANIFEST: &str = "apps/gui/src-tauri/Cargo.toml";
/// Rust backend source holding the connection commands
pub const BACKEND: &str = "apps/gui/src-tauri/src/lib.rs";
/// React frontend console component
pub const FRONTEND: &str = "apps/gui/src/components/Console.tsx";
/// Implementation documentation
pub const DOCS: &str = "WIFI_CONSOLE_IMPLEMENTATION.md";

/// Build the full Wi-Fi console validation suite
///
/// Six groups: artifact existence, manifest dependencies, backend
/// declarations, frontend UI hooks, and backward compatibility of the
/// legacy serial commands on both sides.
pub fn wifi_console_suite() -> Result<Vec<CheckGroup>, SuiteError> {
    Ok(vec![
        CheckGroup::new(
            "📁 File Existence Tests",
            vec![
                Check::exists(MANIFEST, "Cargo.toml exists"),
                Check::exists(BACKEND, "Rust backend exists"),
                Check::exists(FRONTEND, "React frontend exists"),
                Check::exists(DOCS, "Documentation exists"),
            ],
        ),
        content_group(
            "📦 Dependency Tests",
            MANIFEST,
            &[
                (r"tokio-tungstenite", "WebSocket dependency added"),
                (r"futures-util", "Futures dependency added"),
            ],
        )?,
        content_group(
            "🦀 Rust Backend Tests",
            BACKEND,
            &[
                (r"enum ConnectionType", "ConnectionType enum defined"),
                (r"trait Connection", "Connection trait defined"),
                (r"struct TcpConnection", "TcpConnection struct defined"),
                (r"connect_device", "Generic connect_device command exists"),
                (r"disconnect_device", "Generic disconnect_device command exists"),
                (r"write_device_data", "Generic write_device_data command exists"),
                (r"connection-data", "New event type defined"),
            ],
        )?,
        content_group(
            "⚛️ React Frontend Tests",
            FRONTEND,
            &[
                (
                    r"ConnectionType.*=.*'Serial'.*\|.*'Tcp'.*\|.*'WebSocket'",
                    "Connection type definition",
                ),
                (r"connectionType.*useState", "Connection type state"),
                (r"ipAddress.*useState", "IP address state"),
                (r"port.*useState", "Port state"),
                (r"TCP.*Wi-Fi", "TCP Wi-Fi option in UI"),
                (r"WebSocket.*Wi-Fi", "WebSocket Wi-Fi option in UI"),
                (r"connection-data", "New event listener"),
                (r"connectToDevice", "Generic connection function"),
            ],
        )?,
        content_group(
            "🔄 Backward Compatibility Tests (Rust backend)",
            BACKEND,
            &[
                (r"connect_serial_port", "Legacy serial connect command preserved"),
                (r"disconnect_serial_port", "Legacy serial disconnect command preserved"),
                (r"write_serial_data", "Legacy serial write command preserved"),
            ],
        )?,
        content_group(
            "🔄 Backward Compatibility Tests (React frontend)",
            FRONTEND,
            &[
                (r"connect_serial_port", "Legacy serial connect used in frontend"),
                (r"disconnect_serial_port", "Legacy serial disconnect used in frontend"),
                (r"write_serial_data", "Legacy serial write used in frontend"),
                (r"serial-data", "Legacy serial event listener in frontend"),
            ],
        )?,
    ])
}

/// Build a group of content checks against a single file
fn content_group(
    title: &str,
    path: &str,
    patterns: &[(&str, &str)],
) -> Result<CheckGroup, SuiteError> {
    let checks = patterns
        .iter()
        .map(|&(pattern, description)| {
            Check::contains(path, pattern, description).map_err(|source| {
                SuiteError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CheckGroup::new(title, checks))
}
