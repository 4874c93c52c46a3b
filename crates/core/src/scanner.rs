//! Single-pass comment scanner.
//!
//! Classifies every byte of the input into one lexical mode and records each
//! line or block comment it passes through. String and regex literal bodies
//! are opaque: comment openers inside them are never seen.
//!
//! All delimiters the scanner reacts to are ASCII. UTF-8 continuation bytes
//! (0x80–0xBF) never match them, so every recorded offset falls on a char
//! boundary and the input can be walked as bytes.

use crate::token::{CommentKind, CommentToken};

/// Words after which a `/` begins a regex literal rather than a division.
const REGEX_KEYWORDS: &[&[u8]] = &[
    b"return",
    b"typeof",
    b"instanceof",
    b"in",
    b"of",
    b"new",
    b"delete",
    b"void",
    b"throw",
    b"case",
    b"do",
    b"else",
    b"yield",
    b"await",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    SingleQuoteString,
    DoubleQuoteString,
    TemplateString,
    RegexLiteral,
    LineComment,
    BlockComment,
}

/// The last significant thing seen in code, for the regex heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    /// Nothing but whitespace and comments so far.
    Start,
    /// A non-whitespace code byte at this offset.
    Code(usize),
    /// The end of a string or regex literal.
    Literal,
}

struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    prev: Prev,
    tokens: Vec<CommentToken>,
}

/// Scan `text` and return its comments in source order.
///
/// Total for every input: unterminated strings, regex literals, and block
/// comments all run to the end of input, and every step consumes at least
/// one byte.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn scan(text: &str) -> Vec<CommentToken> {
    let mut scanner = Scanner {
        src: text,
        bytes: text.as_bytes(),
        pos: 0,
        prev: Prev::Start,
        tokens: Vec::new(),
    };

    let mut mode = Mode::Code;
    while scanner.pos < scanner.bytes.len() {
        mode = match mode {
            Mode::Code => scanner.code(),
            Mode::SingleQuoteString => scanner.quoted(b'\''),
            Mode::DoubleQuoteString => scanner.quoted(b'"'),
            Mode::TemplateString => scanner.quoted(b'`'),
            Mode::RegexLiteral => scanner.regex(),
            Mode::LineComment => scanner.line_comment(),
            Mode::BlockComment => scanner.block_comment(),
        };
    }

    tracing::debug!(comments = scanner.tokens.len(), "scan complete");
    scanner.tokens
}

impl Scanner<'_> {
    /// Advance through plain code until something opens another mode.
    ///
    /// Comment modes are returned with `pos` still on the opening `/` so the
    /// token can record its start; every other transition consumes its
    /// opening byte.
    fn code(&mut self) -> Mode {
        let bytes = self.bytes;
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b'\'' => return self.open(Mode::SingleQuoteString),
                b'"' => return self.open(Mode::DoubleQuoteString),
                b'`' => return self.open(Mode::TemplateString),
                b'/' => match bytes.get(self.pos + 1) {
                    Some(b'/') => return Mode::LineComment,
                    Some(b'*') => return Mode::BlockComment,
                    _ if self.slash_starts_regex() => return self.open(Mode::RegexLiteral),
                    _ => self.significant(),
                },
                b'\\' => {
                    // Escaped byte outside a literal is still code.
                    self.pos += 1;
                    if self.pos < bytes.len() {
                        self.significant();
                    }
                }
                _ if b.is_ascii_whitespace() => self.pos += 1,
                _ => self.significant(),
            }
        }
        Mode::Code
    }

    fn open(&mut self, mode: Mode) -> Mode {
        self.pos += 1;
        mode
    }

    fn significant(&mut self) {
        self.prev = Prev::Code(self.pos);
        self.pos += 1;
    }

    /// Consume a quoted literal body up to and including the matching quote.
    fn quoted(&mut self, quote: u8) -> Mode {
        while let Some(&b) = self.bytes.get(self.pos) {
            self.pos += 1;
            if b == b'\\' {
                self.pos += 1;
            } else if b == quote {
                self.prev = Prev::Literal;
                return Mode::Code;
            }
        }
        self.pos = self.bytes.len();
        Mode::Code
    }

    /// Consume a regex literal body, its closing `/`, and any flags.
    fn regex(&mut self) -> Mode {
        let mut in_class = false;
        while let Some(&b) = self.bytes.get(self.pos) {
            match b {
                // A regex cannot span lines; the `/` was a division after all.
                b'\n' | b'\r' => {
                    self.prev = Prev::Literal;
                    return Mode::Code;
                }
                b'\\' => match self.bytes.get(self.pos + 1) {
                    // An escape cannot swallow the line break either.
                    Some(b'\n' | b'\r') => {
                        self.pos += 1;
                        self.prev = Prev::Literal;
                        return Mode::Code;
                    }
                    _ => self.pos += 2,
                },
                b'[' => {
                    in_class = true;
                    self.pos += 1;
                }
                b']' => {
                    in_class = false;
                    self.pos += 1;
                }
                b'/' if !in_class => {
                    self.pos += 1;
                    while self
                        .bytes
                        .get(self.pos)
                        .is_some_and(|c| c.is_ascii_alphabetic())
                    {
                        self.pos += 1;
                    }
                    self.prev = Prev::Literal;
                    return Mode::Code;
                }
                _ => self.pos += 1,
            }
        }
        self.pos = self.bytes.len();
        Mode::Code
    }

    fn line_comment(&mut self) -> Mode {
        let start = self.pos;
        let body = start + 2;
        let end = self.src[body..]
            .find(['\n', '\r'])
            .map_or(self.src.len(), |i| body + i);
        self.push(CommentKind::Line, start, end)
    }

    fn block_comment(&mut self) -> Mode {
        let start = self.pos;
        let body = start + 2;
        let end = self.src[body..]
            .find("*/")
            .map_or(self.src.len(), |i| body + i + 2);
        self.push(CommentKind::Block, start, end)
    }

    fn push(&mut self, kind: CommentKind, start: usize, end: usize) -> Mode {
        let protected = self.bytes.get(start + 2) == Some(&b'!');
        tracing::trace!(?kind, start, end, protected, "comment");
        self.tokens.push(CommentToken {
            kind,
            start,
            end,
            protected,
        });
        self.pos = end;
        Mode::Code
    }

    fn slash_starts_regex(&self) -> bool {
        match self.prev {
            Prev::Start => true,
            Prev::Literal => false,
            Prev::Code(at) => regex_allowed_after(self.bytes, at),
        }
    }
}

/// Whether a `/` whose last significant code byte sits at `at` opens a regex.
///
/// Approximate by nature: only the preceding byte (or word, for keywords
/// such as `return`) is consulted, never the surrounding expression.
fn regex_allowed_after(bytes: &[u8], at: usize) -> bool {
    let b = bytes[at];
    if matches!(b, b')' | b']') {
        return false;
    }
    if !is_word_byte(b) {
        return true;
    }
    let word_start = bytes[..at]
        .iter()
        .rposition(|&c| !is_word_byte(c))
        .map_or(0, |i| i + 1);
    REGEX_KEYWORDS.contains(&&bytes[word_start..=at])
}

/// Identifier bytes. Non-ASCII bytes count so `café / 2` stays a division.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}
