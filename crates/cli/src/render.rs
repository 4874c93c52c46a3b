//! Terminal and JSON output for the CLI.
//!
//! Stripped text always goes to stdout. Warnings are rendered as ariadne
//! [`Report`]s on stderr in pretty mode, or embedded in the command's JSON
//! object otherwise.

use anyhow::Result;
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use serde::Serialize;

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Stripped text on stdout, coloured warnings and status on stderr.
    Pretty,
    /// A single JSON object on stdout.
    Json,
}

impl Format {
    /// Resolve the `--output` flag. Pretty unless JSON was asked for, since
    /// piping the stripped text onward is the common case.
    pub(crate) fn resolve(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            _ => Format::Pretty,
        }
    }
}

// ── Warnings ────────────────────────────────────────────────────────────

/// A non-fatal problem found in the input.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Warning {
    /// Report headline.
    pub(crate) message: String,
    /// Label attached to the source snippet.
    pub(crate) label: String,
    /// Byte offset where the problem starts.
    pub(crate) start: usize,
    /// Byte offset where the problem ends (exclusive).
    pub(crate) end: usize,
}

/// Render warnings in pretty (ariadne) format to stderr.
pub(crate) fn render_warnings(source: &str, filename: &str, warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }

    let config = Config::default().with_compact(false);

    // Build the Source once (O(n) line index) and reuse across all reports.
    let mut cache = (filename, Source::from(source));

    for warning in warnings {
        // Point at the opener only; the span itself may run for pages.
        let start = warning.start.min(source.len());
        let end = (start + 2).min(warning.end).min(source.len()).max(start);

        Report::build(ReportKind::Warning, (filename, start..end))
            .with_message(&warning.message)
            .with_config(config)
            .with_label(
                Label::new((filename, start..end))
                    .with_message(&warning.label)
                    .with_color(Color::Yellow),
            )
            .with_help("close it with */ or the rest of the file is stripped")
            .finish()
            .eprint(&mut cache)
            .ok();
    }
}

/// Print a coloured summary line with the warning count.
pub(crate) fn print_summary(warnings: &[Warning]) {
    use ariadne::Fmt;

    if warnings.is_empty() {
        return;
    }
    let n = warnings.len();
    let s = if n == 1 { "" } else { "s" };
    eprintln!("{}", format!("{n} warning{s}").fg(Color::Yellow));
}

// ── Status ──────────────────────────────────────────────────────────────

/// Emit a status message for --check / --write in the appropriate format.
///
/// In JSON mode `details` (an object) is extended with `status` and `file`.
pub(crate) fn status_message(
    format: Format,
    condition: bool,
    if_true: &str,
    if_false: &str,
    file: &str,
    details: &serde_json::Value,
) -> Result<()> {
    let msg = if condition { if_true } else { if_false };
    match format {
        Format::Json => {
            let mut out = details.clone();
            if let Some(obj) = out.as_object_mut() {
                obj.insert("status".into(), msg.into());
                obj.insert("file".into(), file.into());
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            eprintln!("{}: {}", msg, file);
        }
    }
    Ok(())
}
