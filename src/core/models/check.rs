//! Check model
//!
//! A check declares: "this artifact must exist" or "this file must contain
//! this pattern." Evaluation is a textual presence test over raw file
//! contents, nothing more - a passing check proves the artifact is there,
//! not that it behaves correctly.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// The two assertion forms a check can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// The path exists on disk (file or directory); no content is read
    FileExists,
    /// The file's full text contains a match for a regex pattern
    ContentMatches,
}

/// One atomic assertion against the filesystem
#[derive(Debug, Clone)]
pub enum Check {
    /// Assert that a path exists (file or directory)
    FileExists {
        /// Path relative to the base directory
        path: String,
        /// Human-readable description shown in the report
        description: String,
    },
    /// Assert that a file's content matches a pattern anywhere
    ContentMatches {
        /// Path relative to the base directory
        path: String,
        /// Compiled pattern, multi-line and dot-matches-newline
        pattern: Regex,
        /// Human-readable description shown in the report
        description: String,
    },
}

impl Check {
    /// Create a file-existence check
    #[must_use]
    pub fn exists(path: impl Into<String>, description: impl Into<String>) -> Self {
        Self::FileExists {
            path: path.into(),
            description: description.into(),
        }
    }

    /// Create a content check
    ///
    /// The pattern is compiled with multi-line anchors and dot-matches-newline
    /// enabled, so `.*` spans lines and `^`/`$` match at line boundaries.
    pub fn contains(
        path: impl Into<String>,
        pattern: &str,
        description: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern)
            .multi_line(true)
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self::ContentMatches {
            path: path.into(),
            pattern,
            description: description.into(),
        })
    }

    /// The path this check targets, relative to the base directory
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::FileExists { path, .. } | Self::ContentMatches { path, .. } => path,
        }
    }

    /// The human-readable description
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::FileExists { description, .. } | Self::ContentMatches { description, .. } => {
                description
            },
        }
    }

    /// Which assertion form this check takes
    #[must_use]
    pub const fn kind(&self) -> CheckKind {
        match self {
            Self::FileExists { .. } => CheckKind::FileExists,
            Self::ContentMatches { .. } => CheckKind::ContentMatches,
        }
    }
}

/// A titled group of checks, run together and reported under one header
#[derive(Debug, Clone)]
pub struct CheckGroup {
    /// Section header shown before the group's result lines
    pub title: String,
    /// The checks in this group, in report order
    pub checks: Vec<Check>,
}

impl CheckGroup {
    /// Create a group from a title and its checks
    #[must_use]
    pub fn new(title: impl Into<String>, checks: Vec<Check>) -> Self {
        Self {
            title: title.into(),
            checks,
        }
    }
}
