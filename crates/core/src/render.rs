//! Output construction from scanned comment tokens.

use serde::Serialize;

use crate::options::Options;
use crate::token::CommentToken;

/// What the renderer does with one comment that matches the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Remove the comment's exact span.
    Delete,
    /// Leave the comment where it is.
    Retain,
    /// Remove the comment from its position and prepend it to the output.
    Hoist,
}

impl Disposition {
    /// Decide the fate of a token already known to match `options.mode`.
    pub fn of(token: &CommentToken, options: &Options) -> Self {
        if token.protected && options.safe {
            Disposition::Hoist
        } else if token.protected && options.keep_protected {
            Disposition::Retain
        } else {
            Disposition::Delete
        }
    }
}

/// Counts of what happened to matching comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StripStats {
    /// Comments deleted outright.
    pub removed: usize,
    /// Protected comments moved to the top.
    pub hoisted: usize,
    /// Protected comments left in place.
    pub retained: usize,
}

impl StripStats {
    /// Whether rendering changed anything at all.
    pub fn changed(&self) -> bool {
        self.removed + self.hoisted > 0
    }
}

/// Rendered text plus the counts that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    /// The output text.
    pub output: String,
    /// What was done to the matching comments.
    pub stats: StripStats,
}

/// Render `text` with the comments in `tokens` removed or hoisted per
/// `options`.
///
/// `tokens` must come from scanning `text`.
pub fn render(text: &str, tokens: &[CommentToken], options: &Options) -> String {
    render_with_stats(text, tokens, options).output
}

/// Like [`render`], also reporting how many comments were removed, hoisted,
/// and retained.
pub fn render_with_stats(text: &str, tokens: &[CommentToken], options: &Options) -> Stripped {
    let mut body = String::with_capacity(text.len());
    let mut hoisted: Vec<&str> = Vec::new();
    let mut stats = StripStats::default();
    let mut cursor = 0usize;

    for token in tokens.iter().filter(|t| options.mode.matches(t.kind)) {
        match Disposition::of(token, options) {
            Disposition::Retain => {
                stats.retained += 1;
                continue;
            }
            Disposition::Hoist => {
                stats.hoisted += 1;
                hoisted.push(token.text(text));
            }
            Disposition::Delete => stats.removed += 1,
        }
        body.push_str(&text[cursor..token.start]);
        cursor = token.end;
    }
    body.push_str(&text[cursor..]);

    tracing::debug!(
        mode = %options.mode,
        removed = stats.removed,
        hoisted = stats.hoisted,
        retained = stats.retained,
        "render complete"
    );

    if hoisted.is_empty() {
        return Stripped { output: body, stats };
    }

    // Each hoisted comment on its own line, in encounter order, before the body.
    let prefix_len: usize = hoisted.iter().map(|c| c.len() + 1).sum();
    let mut output = String::with_capacity(prefix_len + body.len());
    for comment in hoisted {
        output.push_str(comment);
        output.push('\n');
    }
    output.push_str(&body);
    Stripped { output, stats }
}
