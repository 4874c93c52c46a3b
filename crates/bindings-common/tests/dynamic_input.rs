//! Boundary tests for dynamically typed input.
//!
//! These tests ensure the bindings-common paths reject non-string input with
//! `InvalidArgument` and otherwise produce the same results as direct core
//! calls.

use comment_strip_bindings_common as common;
use comment_strip_core::{Mode, StripError, StripOptions, strip, strip_block, strip_line};
use serde_json::json;

#[test]
fn non_string_input_is_rejected_in_every_mode() {
    for mode in [Mode::All, Mode::LineOnly, Mode::BlockOnly] {
        for (value, found) in [
            (json!(123), "number"),
            (json!({ "a": 1 }), "object"),
            (json!(["x"]), "array"),
            (json!(true), "boolean"),
            (json!(null), "null"),
        ] {
            let err = common::strip_value(mode, &value, None).expect_err("non-string must fail");
            assert_eq!(err, StripError::invalid_argument(found));
            assert!(
                err.to_string().contains("expected a string"),
                "unexpected message: {err}"
            );
        }
    }
}

#[test]
fn input_is_checked_before_options() {
    let err = common::strip_value(Mode::All, &json!(123), Some(&json!("bad")))
        .expect_err("non-string must fail");
    assert!(matches!(err, StripError::InvalidArgument { .. }));
}

#[test]
fn empty_string_is_valid() {
    assert_eq!(
        common::strip_value(Mode::All, &json!(""), None).expect("empty string"),
        ""
    );
}

#[test]
fn strip_checked_reports_host_type_name() {
    let err = common::strip_checked(Mode::LineOnly, None, "int", StripOptions::default())
        .expect_err("missing string must fail");
    assert_eq!(err.to_string(), "expected a string, found int");
}

#[test]
fn output_matches_core_entry_points() {
    let input = "//! keep\na; // b\n/* c */ d;";
    let options = json!({ "keepProtected": true, "somethingElse": 1 });
    let core_opts = StripOptions::new().with_keep_protected(true);

    for (mode, expected) in [
        (Mode::All, strip(input, core_opts)),
        (Mode::LineOnly, strip_line(input, core_opts)),
        (Mode::BlockOnly, strip_block(input, core_opts)),
    ] {
        let via_bindings =
            common::strip_value(mode, &json!(input), Some(&options)).expect("string input");
        assert_eq!(via_bindings, expected, "mode {mode}");
    }
}

#[test]
fn options_shape_is_validated() {
    assert_eq!(
        common::options_from_value(None).expect("absent options"),
        StripOptions::default()
    );
    assert_eq!(
        common::options_from_value(Some(&json!(null))).expect("null options"),
        StripOptions::default()
    );
    assert_eq!(
        common::options_from_value(Some(&json!({ "safe": true }))).expect("safe"),
        StripOptions::new().with_safe(true)
    );
    assert!(matches!(
        common::options_from_value(Some(&json!({ "keepProtected": "yes" }))),
        Err(StripError::InvalidOptions(_))
    ));
    assert!(matches!(
        common::options_from_value(Some(&json!(42))),
        Err(StripError::InvalidOptions(_))
    ));
}

#[test]
fn mode_names_parse() {
    assert_eq!(common::parse_mode(None), Ok(Mode::All));
    assert_eq!(common::parse_mode(Some("line")), Ok(Mode::LineOnly));
    assert_eq!(common::parse_mode(Some("block")), Ok(Mode::BlockOnly));
    assert!(matches!(
        common::parse_mode(Some("both")),
        Err(StripError::UnknownMode(_))
    ));
}
