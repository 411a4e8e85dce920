//! Runs connection work on the blocking pool
//!
//! ## Logging Ownership
//!
//! This module owns lifecycle logging for repository operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` / `info!()` for
//! internal details.

#![allow(clippy::result_large_err)]

use recipebox_core::errors::{RbError, RbErrorKind, Result};
use recipebox_core::{log_op_end, log_op_error, log_op_start};
use recipebox_core_types::RequestId;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Run `work` against the shared connection without blocking the executor
///
/// A poisoned lock or a worker that panicked surfaces as a `Concurrency`
/// error. Every error leaving here carries `op` and the call's request id.
pub(crate) async fn run_logged<T, F>(conn: &Arc<Mutex<Connection>>, op: &'static str, work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
{
    let request_id = RequestId::new();
    log_op_start!(op, request_id = %request_id);
    let start = Instant::now();

    let conn = Arc::clone(conn);
    let joined = tokio::task::spawn_blocking(move || {
        let mut guard = conn
            .lock()
            .map_err(|_| concurrency_error("connection lock poisoned"))?;
        work(&mut guard)
    })
    .await;

    let result = joined
        .unwrap_or_else(|e| Err(concurrency_error(format!("worker failed: {e}"))))
        .map_err(|e| with_context(e, op, &request_id));

    match &result {
        Ok(_) => {
            log_op_end!(
                op,
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %request_id
            );
        }
        Err(e) => {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %request_id
            );
        }
    }

    result
}

fn concurrency_error(message: impl Into<String>) -> RbError {
    RbError::new(RbErrorKind::Concurrency).with_message(message)
}

/// Attach the repository op (unless a lower layer named one) and request id
fn with_context(err: RbError, op: &str, request_id: &RequestId) -> RbError {
    let err = if err.op().is_none() { err.with_op(op) } else { err };
    err.with_request_id(request_id.clone())
}
