//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use resdex_core::log_op_start;
/// log_op_start!("diff");
/// log_op_start!("diff", version = "v2.0.0");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = resdex_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = resdex_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use resdex_core::log_op_end;
/// log_op_end!("diff", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = resdex_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = resdex_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`. A request id attached to the
/// error is logged as `request_id`, so callers must not pass that field too.
///
/// # Example
///
/// ```
/// # use resdex_core::{log_op_error, errors::ResdexError};
/// let err = ResdexError::VersionNotFound { version: "v9".to_string() };
/// log_op_error!("select", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = resdex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            request_id = ex_err.request_id().map(|r| r.as_str()),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = resdex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            request_id = ex_err.request_id().map(|r| r.as_str()),
            $($field)*
        );
    }};
}

/// Log a non-fatal data anomaly (input accepted, something was ignored)
///
/// # Example
///
/// ```
/// # use resdex_core::log_anomaly;
/// log_anomaly!("render_init_signature", resource_id = "user", ignored_initializers = 1);
/// ```
#[macro_export]
macro_rules! log_anomaly {
    ($op:expr, $($field:tt)*) => {
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = resdex_core_types::schema::EVENT_ANOMALY,
            $($field)*
        );
    };
}
