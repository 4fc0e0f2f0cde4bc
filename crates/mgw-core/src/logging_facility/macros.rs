//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use mgw_core::log_op_start;
/// log_op_start!("additem");
/// log_op_start!("additem", command_id = "c123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use mgw_core::log_op_end;
/// log_op_end!("additem", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Persistence failures log at `error`; rejected user input at `warn`.
///
/// # Example
///
/// ```
/// # use mgw_core::{log_op_error, errors::MgwError};
/// let err = MgwError::EmptyMenu;
/// log_op_error!("deleteitem", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::{ErrorCategory, ExError};
        let ex_err: ExError = $err.into();
        if ex_err.category() == ErrorCategory::Persistence {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = $crate::core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                $($field)*
            );
        } else {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = $crate::core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                $($field)*
            );
        }
    }};
}
