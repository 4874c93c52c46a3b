//! Comment stripping core library.
//!
//! Removes `//` line comments and `/* */` block comments from program-like
//! text while leaving everything else byte-for-byte intact. String literals
//! (single, double, and backtick quoted) and regex literals are opaque, so
//! comment-like text inside them survives.
//!
//! The main entry points are [`strip`], [`strip_line`], and [`strip_block`].
//! Lower-level callers can run [`scan`] and [`render`] separately.
//!
//! ```
//! use comment_strip_core::{StripOptions, strip};
//!
//! let out = strip("let url = \"http://x\"; // note", StripOptions::default());
//! assert_eq!(out, "let url = \"http://x\"; ");
//! ```

#![warn(missing_docs)]

/// Boundary errors (non-string input, bad options, unknown mode).
pub mod error;
/// Per-call options and the mode enum.
pub mod options;
/// Output construction from comment tokens.
pub mod render;
/// Single-pass comment scanner.
pub mod scanner;
/// Comment token type.
pub mod token;

// ── Convenience re-exports ──────────────────────────────────────────────────

pub use error::StripError;
pub use options::{Mode, Options, StripOptions};
pub use render::{Disposition, StripStats, Stripped, render, render_with_stats};
pub use scanner::scan;
pub use token::{CommentKind, CommentToken};

// ── Entry points ────────────────────────────────────────────────────────────

/// Strip line and block comments.
pub fn strip(text: &str, options: StripOptions) -> String {
    strip_with(text, &Options::new(Mode::All, options))
}

/// Strip only `//` line comments.
pub fn strip_line(text: &str, options: StripOptions) -> String {
    strip_with(text, &Options::new(Mode::LineOnly, options))
}

/// Strip only `/* */` block comments.
pub fn strip_block(text: &str, options: StripOptions) -> String {
    strip_with(text, &Options::new(Mode::BlockOnly, options))
}

/// Strip with a mode chosen at runtime.
pub fn strip_with(text: &str, options: &Options) -> String {
    strip_with_stats(text, options).output
}

/// Strip with a mode chosen at runtime, reporting what was done.
pub fn strip_with_stats(text: &str, options: &Options) -> Stripped {
    let tokens = scan(text);
    render_with_stats(text, &tokens, options)
}
