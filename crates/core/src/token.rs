use serde::{Deserialize, Serialize};

/// Which comment syntax a token was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    /// `// ...` up to (not including) the line break.
    Line,
    /// `/* ... */`, or `/* ...` to end of input when unterminated.
    Block,
}

/// A comment found by the scanner.
///
/// `start`/`end` are byte offsets into the scanned text; `end` is exclusive.
/// The slice `&text[start..end]` always includes the comment delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentToken {
    /// Line or block comment.
    pub kind: CommentKind,
    /// Byte offset of the opening `/`.
    pub start: usize,
    /// Byte offset one past the last byte of the comment.
    pub end: usize,
    /// `true` when the opener is immediately followed by `!` (`//!`, `/*!`).
    pub protected: bool,
}

impl CommentToken {
    /// Length of the comment in bytes, delimiters included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`: a comment spans at least its two-byte opener.
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Byte range of the comment.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Borrow the comment's text from the source it was scanned from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span()]
    }

    /// Whether a block comment has its closing `*/`. Line comments are
    /// always terminated (by a line break or the end of input).
    pub fn is_terminated(&self, source: &str) -> bool {
        match self.kind {
            CommentKind::Line => true,
            CommentKind::Block => self.len() >= 4 && self.text(source).ends_with("*/"),
        }
    }
}
