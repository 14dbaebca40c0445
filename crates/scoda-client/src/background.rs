//! Fire-and-forget operations with a logged outcome.
//!
//! [`best_effort`] never propagates the failure of the wrapped future. The
//! enclosing flow succeeds or fails on its own terms; the outcome is only
//! visible in the log and in the returned `Option`.

use std::fmt::Display;
use std::future::Future;

pub async fn best_effort<T, E, F>(operation: &'static str, fut: F) -> Option<T>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match fut.await {
        Ok(value) => {
            tracing::debug!(operation, "best-effort operation succeeded");
            Some(value)
        }
        Err(e) => {
            tracing::warn!(operation, error = %e, "best-effort operation failed (ignored)");
            None
        }
    }
}
