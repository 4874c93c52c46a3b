//! Per-call configuration for the renderer.
//!
//! Nothing here is global: every entry point builds a fresh [`Options`] from
//! its fixed [`Mode`] and the caller's [`StripOptions`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StripError;
use crate::token::CommentKind;

/// Which comment kinds a call is allowed to remove.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Line and block comments.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Only `//` comments; block comments pass through untouched.
    #[serde(rename = "line")]
    LineOnly,
    /// Only `/* */` comments; line comments pass through untouched.
    #[serde(rename = "block")]
    BlockOnly,
}

impl Mode {
    /// Whether comments of `kind` are subject to this mode.
    pub fn matches(self, kind: CommentKind) -> bool {
        match self {
            Mode::All => true,
            Mode::LineOnly => kind == CommentKind::Line,
            Mode::BlockOnly => kind == CommentKind::Block,
        }
    }

    /// Short name used by the CLI and bindings (`all`, `line`, `block`).
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::LineOnly => "line",
            Mode::BlockOnly => "block",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Mode::All),
            "line" => Ok(Mode::LineOnly),
            "block" => Ok(Mode::BlockOnly),
            other => Err(StripError::UnknownMode(other.to_string())),
        }
    }
}

/// Caller-supplied flags, shared by all three entry points.
///
/// Deserializes from `{ "keepProtected": bool, "safe": bool }`; both fields
/// are optional and unknown fields are ignored.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StripOptions {
    /// Leave protected (`//!`, `/*!`) comments where they are.
    pub keep_protected: bool,
    /// Move protected comments to the top of the output. Takes precedence
    /// over `keep_protected`.
    pub safe: bool,
}

impl StripOptions {
    /// All flags off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `keep_protected`.
    #[must_use]
    pub fn with_keep_protected(mut self, keep_protected: bool) -> Self {
        self.keep_protected = keep_protected;
        self
    }

    /// Set `safe`.
    #[must_use]
    pub fn with_safe(mut self, safe: bool) -> Self {
        self.safe = safe;
        self
    }
}

/// Complete renderer configuration for a single call.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Options {
    /// Comment kinds eligible for removal.
    pub mode: Mode,
    /// Retain protected comments in place.
    pub keep_protected: bool,
    /// Hoist protected comments to the top of the output.
    pub safe: bool,
}

impl Options {
    /// Combine an entry point's mode with the caller's flags.
    pub fn new(mode: Mode, options: StripOptions) -> Self {
        Self {
            mode,
            keep_protected: options.keep_protected,
            safe: options.safe,
        }
    }
}

impl From<Mode> for Options {
    fn from(mode: Mode) -> Self {
        Self::new(mode, StripOptions::default())
    }
}
