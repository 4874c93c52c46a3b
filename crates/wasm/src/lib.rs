//! WASM bindings for comment-strip.
//!
//! Exposes `strip`, `stripLine`, `stripBlock`, and `stripWith` to JavaScript
//! via `wasm-bindgen`. Arguments arrive as untyped `JsValue`s, so the string
//! check happens here at runtime: anything but a string fails with
//! `expected a string, found <typeof>`.

use wasm_bindgen::prelude::*;

use comment_strip_bindings_common as common;
use comment_strip_core::{Mode, StripError};

// ── Public API ──────────────────────────────────────────────────────────

/// Strip line and block comments.
///
/// `options` is an optional `{ keepProtected?: boolean, safe?: boolean }`.
#[wasm_bindgen]
pub fn strip(input: JsValue, options: JsValue) -> Result<String, JsError> {
    run(Mode::All, &input, options)
}

/// Strip only `//` line comments.
#[wasm_bindgen(js_name = "stripLine")]
pub fn strip_line(input: JsValue, options: JsValue) -> Result<String, JsError> {
    run(Mode::LineOnly, &input, options)
}

/// Strip only `/* */` block comments.
#[wasm_bindgen(js_name = "stripBlock")]
pub fn strip_block(input: JsValue, options: JsValue) -> Result<String, JsError> {
    run(Mode::BlockOnly, &input, options)
}

/// Strip with the mode given by name: `"all"` (default), `"line"`, or `"block"`.
#[wasm_bindgen(js_name = "stripWith")]
pub fn strip_with(input: JsValue, mode: Option<String>, options: JsValue) -> Result<String, JsError> {
    let mode = common::parse_mode(mode.as_deref()).map_err(to_js_error)?;
    run(mode, &input, options)
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn run(mode: Mode, input: &JsValue, options: JsValue) -> Result<String, JsError> {
    let Some(text) = input.as_string() else {
        let found = input
            .js_typeof()
            .as_string()
            .unwrap_or_else(|| "unknown".to_string());
        return Err(to_js_error(StripError::invalid_argument(found)));
    };

    let options = if options.is_undefined() || options.is_null() {
        None
    } else {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(options)
            .map_err(|e| to_js_error(StripError::InvalidOptions(e.to_string())))?;
        Some(value)
    };
    let options = common::options_from_value(options.as_ref()).map_err(to_js_error)?;

    common::strip_checked(mode, Some(text.as_str()), "string", options).map_err(to_js_error)
}

fn to_js_error(err: StripError) -> JsError {
    JsError::new(&err.to_string())
}
