mod render;

use std::fs;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use comment_strip_core::{
    CommentKind, CommentToken, Disposition, Mode, Options, StripOptions, render_with_stats,
    scan,
};

use crate::render::{Format, Warning, print_summary, render_warnings, status_message};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "strip-comments",
    version,
    about = "Strip // and /* */ comments from source files, leaving strings and regex literals intact"
)]
struct Cli {
    /// Output mode: "pretty" writes the stripped text to stdout and
    /// warnings to stderr; "json" writes a single JSON object to stdout.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Strip both line and block comments.
    #[command(visible_alias = "strip")]
    All(StripArgs),
    /// Strip only `//` line comments.
    Line(StripArgs),
    /// Strip only `/* */` block comments.
    Block(StripArgs),
}

#[derive(Args, Debug)]
struct StripArgs {
    /// Source file, or `-` to read stdin.
    file: String,
    /// Leave protected comments (`//!`, `/*!`) in place.
    #[arg(long)]
    keep_protected: bool,
    /// Move protected comments to the top of the output.
    #[arg(long)]
    safe: bool,
    /// Write the stripped output back to the file (in-place).
    #[arg(long, short, conflicts_with = "check")]
    write: bool,
    /// Check whether the file contains strippable comments (exit 1 if so). For CI.
    #[arg(long, conflicts_with = "write")]
    check: bool,
}

impl Cmd {
    fn into_parts(self) -> (Mode, StripArgs) {
        match self {
            Cmd::All(args) => (Mode::All, args),
            Cmd::Line(args) => (Mode::LineOnly, args),
            Cmd::Block(args) => (Mode::BlockOnly, args),
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let format = Format::resolve(cli.output.as_deref());
    let (mode, args) = cli.cmd.into_parts();
    cmd_strip(mode, &args, format)
}

/// Install a stderr subscriber when `RUST_LOG` is set,
/// e.g. `RUST_LOG=comment_strip_core=debug`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_strip(mode: Mode, args: &StripArgs, format: Format) -> Result<()> {
    if args.write && args.file == "-" {
        bail!("--write needs a file path; stdin cannot be rewritten in place");
    }

    let input = read_input(&args.file)?;
    let name = display_name(&args.file);
    let options = Options::new(
        mode,
        StripOptions::new()
            .with_keep_protected(args.keep_protected)
            .with_safe(args.safe),
    );

    let tokens = scan(&input);
    let stripped = render_with_stats(&input, &tokens, &options);
    let warnings = collect_warnings(&input, &tokens, &options);
    let changed = stripped.output != input;
    tracing::debug!(file = name, changed, "stripped");

    // Warnings go to stderr in pretty mode; JSON carries them in the object.
    if format == Format::Pretty {
        render_warnings(&input, name, &warnings);
        print_summary(&warnings);
    }

    if args.check {
        status_message(
            format,
            changed,
            "has comments",
            "no comments",
            name,
            &serde_json::json!({
                "action": "check",
                "mode": mode.as_str(),
                "changed": changed,
                "stats": stripped.stats,
                "warnings": warnings,
            }),
        )?;
        if changed {
            process::exit(1);
        }
    } else if args.write {
        if changed {
            fs::write(&args.file, &stripped.output)
                .with_context(|| format!("failed to write '{}'", args.file))?;
        }
        status_message(
            format,
            changed,
            "stripped",
            "unchanged",
            name,
            &serde_json::json!({
                "action": "write",
                "mode": mode.as_str(),
                "changed": changed,
                "stats": stripped.stats,
                "warnings": warnings,
            }),
        )?;
    } else {
        match format {
            Format::Json => {
                let out = serde_json::json!({
                    "action": "print",
                    "file": name,
                    "mode": mode.as_str(),
                    "changed": changed,
                    "output": stripped.output,
                    "stats": stripped.stats,
                    "warnings": warnings,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            Format::Pretty => print!("{}", stripped.output),
        }
    }

    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(file).with_context(|| format!("failed to read '{file}'"))
    }
}

fn display_name(file: &str) -> &str {
    if file == "-" { "<stdin>" } else { file }
}

/// Unterminated block comments are stripped to end of input, which is
/// rarely what the author meant. Comments the run leaves in place are not
/// reported.
fn collect_warnings(input: &str, tokens: &[CommentToken], options: &Options) -> Vec<Warning> {
    tokens
        .iter()
        .filter(|t| t.kind == CommentKind::Block && !t.is_terminated(input))
        .filter(|t| {
            options.mode.matches(t.kind) && Disposition::of(t, options) != Disposition::Retain
        })
        .map(|t| Warning {
            message: "unterminated block comment runs to end of input".to_string(),
            label: "comment opened here".to_string(),
            start: t.start,
            end: t.end,
        })
        .collect()
}
