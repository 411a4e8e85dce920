//! Lifecycle logging macros
//!
//! Each operation logs one `start` event and then exactly one of `end` or
//! `end_error`, all carrying `component` (the caller's module path) and
//! `op`. Extra `tracing` fields may follow the required arguments. Callers
//! need `tracing` as a dependency.

/// `start` event at INFO
///
/// ```
/// # use recipebox_core::log_op_start;
/// log_op_start!("insert_recipe");
/// log_op_start!("insert_recipe", ingredient_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START
            $(, $($field)+)?
        )
    };
}

/// `end` event at INFO with the elapsed time
///
/// ```
/// # use recipebox_core::log_op_end;
/// log_op_end!("insert_recipe", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)+)?
        )
    };
}

/// `end_error` event at ERROR with the error's kind and stable code
///
/// `$err` is anything convertible into `RbError`.
///
/// ```
/// # use recipebox_core::{log_op_error, errors::RecipeBoxError};
/// let err = RecipeBoxError::RecipeNotFound { recipe_id: 7 };
/// log_op_error!("get_recipe", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let rb_err: $crate::errors::RbError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?rb_err.kind(),
            err_code = rb_err.code()
            $(, $($field)+)?
        )
    }};
}
