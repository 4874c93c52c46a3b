//! Python bindings for comment-strip.
//!
//! Exposes `strip`, `strip_line`, and `strip_block` to Python via PyO3.
//! Input is accepted as any object and checked at runtime, so passing a
//! non-`str` raises `TypeError` with the same message every binding uses.

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use comment_strip_bindings_common as common;
use comment_strip_core::{Mode, StripError, StripOptions};

// ── Public API ──────────────────────────────────────────────────────────

/// Strip line and block comments from `input`.
#[pyfunction]
#[pyo3(signature = (input, keep_protected=false, safe=false))]
fn strip(input: &Bound<'_, PyAny>, keep_protected: bool, safe: bool) -> PyResult<String> {
    run(Mode::All, input, keep_protected, safe)
}

/// Strip only `//` line comments from `input`.
#[pyfunction]
#[pyo3(signature = (input, keep_protected=false, safe=false))]
fn strip_line(input: &Bound<'_, PyAny>, keep_protected: bool, safe: bool) -> PyResult<String> {
    run(Mode::LineOnly, input, keep_protected, safe)
}

/// Strip only `/* */` block comments from `input`.
#[pyfunction]
#[pyo3(signature = (input, keep_protected=false, safe=false))]
fn strip_block(input: &Bound<'_, PyAny>, keep_protected: bool, safe: bool) -> PyResult<String> {
    run(Mode::BlockOnly, input, keep_protected, safe)
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn run(mode: Mode, input: &Bound<'_, PyAny>, keep_protected: bool, safe: bool) -> PyResult<String> {
    let options = StripOptions::new()
        .with_keep_protected(keep_protected)
        .with_safe(safe);

    let text = match input.downcast::<PyString>() {
        Ok(s) => Some(s.to_cow()?),
        Err(_) => None,
    };
    let found = input
        .get_type()
        .name()
        .map(|n| n.to_string())
        .unwrap_or_else(|_| "object".to_string());

    common::strip_checked(mode, text.as_deref(), &found, options).map_err(to_py_err)
}

fn to_py_err(err: StripError) -> PyErr {
    match err {
        StripError::InvalidArgument { .. } => PyTypeError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

// ── Module ──────────────────────────────────────────────────────────────

/// comment-strip — remove // and /* */ comments from source text.
#[pymodule]
fn comment_strip(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(strip, m)?)?;
    m.add_function(wrap_pyfunction!(strip_line, m)?)?;
    m.add_function(wrap_pyfunction!(strip_block, m)?)?;
    Ok(())
}
