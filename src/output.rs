//! Output formatting for human and JSON modes
//!
//! This module renders a [`SuiteReport`] either as the line-oriented
//! human-readable report (section headers, one ✅/❌ line per check, final
//! banner) or as machine-parseable JSON.

use crate::core::models::{CheckKind, CheckResult, SuiteReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

const SEPARATOR_WIDTH: usize = 50;

impl SuiteReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("🔍 Testing Wi-Fi Console Implementation");
        println!("{}", "=".repeat(SEPARATOR_WIDTH));

        for group in &self.groups {
            println!("\n{}:", group.title);
            for result in &group.results {
                println!("{}", result.line());
            }
        }

        println!("\n{}", "=".repeat(SEPARATOR_WIDTH));
        if self.passed {
            println!("🎉 ALL TESTS PASSED! Wi-Fi Console implementation looks good!");
            println!("\n📋 Implementation Summary:");
            println!("   • Backend supports Serial, TCP, and WebSocket connections");
            println!("   • Frontend has connection type selector and Wi-Fi configuration");
            println!("   • Backward compatibility maintained with legacy serial commands");
            println!("   • New generic connection system ready for use");
            println!("   • Documentation and mockups created");
        } else {
            println!("❌ Some tests failed. Please check the implementation.");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl CheckResult {
    /// Format the per-check report line
    ///
    /// Existence checks show the path they probed; content checks show only
    /// the description on pass, and distinguish "pattern not found" from an
    /// unreadable file on fail.
    #[must_use]
    pub fn line(&self) -> String {
        match (self.kind, self.passed) {
            (CheckKind::FileExists, true) => format!("✅ {}: {}", self.description, self.path),
            (CheckKind::FileExists, false) => {
                format!("❌ {}: {} - NOT FOUND", self.description, self.path)
            },
            (CheckKind::ContentMatches, true) => format!("✅ {}", self.description),
            (CheckKind::ContentMatches, false) => self.error.as_ref().map_or_else(
                || format!("❌ {} - Pattern not found", self.description),
                |err| format!("❌ {} - Error reading file: {err}", self.description),
            ),
        }
    }
}
