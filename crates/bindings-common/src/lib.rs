//! Shared logic for comment-strip language bindings (WASM, Python).
//!
//! Binding hosts hand us dynamically typed values. The checks that turn them
//! into a `&str` and [`StripOptions`] live here, so every host rejects the
//! same mistakes with the same messages. Each binding crate wraps these
//! functions with its own type conversion layer.

use comment_strip_core::{Mode, Options, StripError, StripOptions, strip_with};
use serde::Deserialize;
use serde_json::Value;

// ── Mode ────────────────────────────────────────────────────────────────

/// Parse a mode name (`"all"`, `"line"`, `"block"`). `None` means `"all"`.
pub fn parse_mode(mode: Option<&str>) -> Result<Mode, StripError> {
    mode.map_or(Ok(Mode::All), str::parse)
}

// ── Options ─────────────────────────────────────────────────────────────

/// Read `{ keepProtected, safe }` from a JSON value.
///
/// Absent or `null` options mean defaults. Unknown fields are ignored;
/// anything other than an object is rejected.
pub fn options_from_value(options: Option<&Value>) -> Result<StripOptions, StripError> {
    match options {
        None | Some(Value::Null) => Ok(StripOptions::default()),
        Some(v @ Value::Object(_)) => {
            StripOptions::deserialize(v).map_err(|e| StripError::InvalidOptions(e.to_string()))
        }
        Some(other) => Err(StripError::InvalidOptions(format!(
            "expected an object, found {}",
            value_type_name(other)
        ))),
    }
}

// ── Strip ───────────────────────────────────────────────────────────────

/// Strip `input` after checking that the host actually passed a string.
///
/// `input` is `None` when the host value was not a string; `found` names the
/// host type for the error message.
pub fn strip_checked(
    mode: Mode,
    input: Option<&str>,
    found: &str,
    options: StripOptions,
) -> Result<String, StripError> {
    let text = input.ok_or_else(|| StripError::invalid_argument(found))?;
    Ok(strip_with(text, &Options::new(mode, options)))
}

/// Strip a JSON-typed input with an optional JSON options object.
///
/// The input is checked before the options, so a non-string input always
/// reports [`StripError::InvalidArgument`].
pub fn strip_value(
    mode: Mode,
    input: &Value,
    options: Option<&Value>,
) -> Result<String, StripError> {
    let Some(text) = input.as_str() else {
        return Err(StripError::invalid_argument(value_type_name(input)));
    };
    let options = options_from_value(options)?;
    strip_checked(mode, Some(text), "string", options)
}

/// JavaScript-style type name of a JSON value.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
