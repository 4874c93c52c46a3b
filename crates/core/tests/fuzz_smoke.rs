//! Fuzz smoke tests for the scanner and renderer.
//!
//! Random, adversarial, and edge-case inputs are fed through `scan` and
//! `render` to check that they never panic, always terminate, and that the
//! token stream keeps its structural invariants.
//!
//! No external crate dependencies are used — a simple deterministic PRNG
//! provides reproducible randomness.

use comment_strip_core::{
    CommentKind, CommentToken, Mode, Options, StripOptions, render_with_stats, scan,
};

// ─── Simple deterministic PRNG (LCG) ────────────────────────────────────────

struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range(&mut self, max: usize) -> usize {
        (self.next() as usize) % max
    }

    fn gen_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next() as u8).collect()
    }

    fn gen_from(&mut self, alphabet: &[&str], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.gen_range(alphabet.len())])
            .collect()
    }
}

// ─── Invariant checking ─────────────────────────────────────────────────────

/// Assert structural invariants on a token stream, regardless of input.
fn assert_token_invariants(tokens: &[CommentToken], input: &str) {
    let mut last_end = 0usize;
    for t in tokens {
        assert!(
            t.start >= last_end,
            "token {:?} overlaps previous (ended at {}) in {:?}",
            t,
            last_end,
            truncate(input, 120),
        );
        assert!(t.end > t.start, "empty token {:?}", t);
        assert!(t.end <= input.len(), "token {:?} past end of input", t);
        assert!(input.is_char_boundary(t.start) && input.is_char_boundary(t.end));
        assert!(t.text(input).starts_with(match t.kind {
            CommentKind::Line => "//",
            CommentKind::Block => "/*",
        }));
        if t.kind == CommentKind::Block && !t.is_terminated(input) {
            assert_eq!(t.end, input.len(), "unterminated block must reach EOF");
        }
        if t.kind == CommentKind::Line {
            assert!(!t.text(input).contains(['\n', '\r']));
        }
        last_end = t.end;
    }
}

/// Scan and render in every mode, checking invariants and output lengths.
fn fuzz_strip(input: &str) {
    let tokens = scan(input);
    assert_token_invariants(&tokens, input);

    for mode in [Mode::All, Mode::LineOnly, Mode::BlockOnly] {
        let removed: usize = tokens
            .iter()
            .filter(|t| mode.matches(t.kind))
            .map(CommentToken::len)
            .sum();

        let plain = render_with_stats(input, &tokens, &Options::from(mode));
        assert_eq!(plain.output.len(), input.len() - removed);
        if !plain.stats.changed() {
            assert_eq!(plain.output, input);
        }

        // Hoisting moves text and adds one line break per hoisted comment.
        let safe = render_with_stats(
            input,
            &tokens,
            &Options::new(mode, StripOptions::new().with_safe(true)),
        );
        let hoisted_len: usize = tokens
            .iter()
            .filter(|t| mode.matches(t.kind) && t.protected)
            .map(|t| t.len() + 1)
            .sum();
        assert_eq!(
            safe.output.len(),
            input.len() - removed + hoisted_len,
            "safe render length mismatch for {:?}",
            truncate(input, 120),
        );
    }
}

/// Truncate a string for error messages (safe for multi-byte UTF-8).
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let safe_end = (0..=max)
            .rev()
            .find(|&i| s.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}…({} bytes total)", &s[..safe_end], s.len())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category A: Random inputs
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn no_panic_random_bytes() {
    let mut rng = SimpleRng::new(0xDEAD_BEEF);
    for len in [0, 1, 2, 5, 10, 50, 100, 500, 1000, 5000] {
        for _ in 0..20 {
            let bytes = rng.gen_bytes(len);
            let input = String::from_utf8_lossy(&bytes);
            fuzz_strip(&input);
        }
    }
}

#[test]
fn no_panic_random_delimiter_soup() {
    let mut rng = SimpleRng::new(0xBAAD_F00D);
    let alphabet = [
        "/", "*", "!", "\\", "'", "\"", "`", "[", "]", "(", ")", "\n", "\r", " ", "a", "1", "=",
        "é", "return ",
    ];
    for len in [1, 5, 20, 100, 500, 2000] {
        for _ in 0..30 {
            let s = rng.gen_from(&alphabet, len);
            fuzz_strip(&s);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category B: Adversarial delimiters
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn no_panic_truncated_constructs() {
    let cases = [
        "/", "//", "/*", "/*/", "/**", "*/", "/*!", "//!", "'", "\"", "`", "\\", "'\\", "/[",
        "/\\", "x = /", "x = /[/", "'unterminated", "`a${b", "a /* b", "a // b",
    ];
    for input in &cases {
        fuzz_strip(input);
    }
}

#[test]
fn no_panic_repeated_openers() {
    for unit in ["/*", "//", "/", "*/", "'", "\\", "/[", "/*!*/"] {
        fuzz_strip(&unit.repeat(5_000));
    }
}

#[test]
fn only_unterminated_block_comment_strips_to_empty() {
    let input = "/*".repeat(1_000);
    let tokens = scan(&input);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].end, input.len());
}
