//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use veneer_core::log_op_start;
/// log_op_start!("push_batch");
/// log_op_start!("push_batch", mutation_id = "m123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = veneer_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = veneer_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use veneer_core::log_op_end;
/// log_op_end!("push_batch", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = veneer_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = veneer_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```ignore
/// # use veneer_core::{log_op_error, errors::VeneerError};
/// # use veneer_core::update::TableKind;
/// let err = VeneerError::PayloadMismatch {
///     table: TableKind::File,
///     payload: TableKind::User,
/// };
/// log_op_error!("update_committed", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: &$crate::errors::VeneerError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = veneer_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err: &$crate::errors::VeneerError = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = veneer_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err.code(),
            $($field)*
        );
    }};
}
