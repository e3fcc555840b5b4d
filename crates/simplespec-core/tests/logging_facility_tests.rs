#![allow(clippy::unwrap_used, clippy::expect_used)]

use simplespec_core::errors::{ExErrorKind, SpecLangError};
use simplespec_core::logging_facility::test_capture::init_test_capture;
use simplespec_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_KEY, FIELD_LINES,
};
use simplespec_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, key = "user/tests/spec");

    let start_events = capture.matching(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });

    assert_eq!(start_events.len(), 1, "Should have exactly one start event");
    assert_eq!(start_events[0].field(FIELD_KEY), Some("user/tests/spec"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, lines = 7);

    let end_events = capture.matching(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END)
    });

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
    assert_eq!(end_events[0].field(FIELD_LINES), Some("7"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SpecLangError::OpenFailed {
        key: "user/tests/spec".to_string(),
        path: "/nonexistent/spec.ini".to_string(),
        reason: "No such file or directory".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.matching(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR)
    });

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some(ExErrorKind::Io.code()));
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_4";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 1);

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
    assert_eq!(
        capture.count_events(|e| e.op.as_deref() == Some(op_name)),
        2,
        "Start and end should be logged exactly once each"
    );
}
