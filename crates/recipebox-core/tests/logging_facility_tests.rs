#![allow(clippy::unwrap_used, clippy::expect_used)]

use recipebox_core::errors::{RbErrorKind, RecipeBoxError};
use recipebox_core::logging_facility::test_capture::init_test_capture;
use recipebox_core::{log_op_end, log_op_error, log_op_start};
use recipebox_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, recipe_id = 5);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event(), Some(EVENT_START));
    assert_eq!(events[0].field("recipe_id"), Some("5"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end = capture.find(op_name, EVENT_END).expect("end event");
    assert_eq!(end.field(FIELD_DURATION_MS), Some("42"));
    assert_eq!(capture.events_for_op(op_name).len(), 1);
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = RecipeBoxError::RecipeNotFound { recipe_id: 9 };
    log_op_error!(op_name, err, duration_ms = 10, recipe_id = 9);

    let event = capture.find(op_name, EVENT_END_ERROR).expect("end_error event");
    assert_eq!(event.level, tracing::Level::ERROR);
    assert_eq!(event.field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(
        event.field(FIELD_ERR_KIND),
        Some(format!("{:?}", RbErrorKind::NotFound).as_str())
    );
    assert_eq!(event.field("recipe_id"), Some("9"));
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_4";

    log_op_start!(op_name);

    let start = capture.find(op_name, EVENT_START).expect("start event");
    assert_eq!(start.component(), Some("logging_facility_tests"));
}
