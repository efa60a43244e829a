//! Tokio Runtime Bridge
//!
//! The dataset loader is async (reqwest, tokio::fs) while hosts such as the
//! command-line binary are synchronous. This module owns one tokio runtime
//! and lets synchronous or foreign-executor code drive futures on it.
//!
//! ## Pattern
//!
//! ```text
//! sync host
//!     │
//!     ▼
//! block_on(session.reload(&source))
//!     │
//!     ▼
//! tokio::Runtime
//!     │
//!     ▼
//! Result returned to host
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

use crate::error::{Error, Result};

/// Global tokio runtime instance, or the reason it could not be built
static TOKIO_RUNTIME: OnceLock<std::result::Result<Runtime, String>> = OnceLock::new();

/// Get or initialize the global tokio runtime
///
/// Built at most once; concurrent first callers wait on the same init.
fn get_runtime() -> Result<&'static Runtime> {
    TOKIO_RUNTIME
        .get_or_init(|| Runtime::new().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|message| Error::Invalid {
            message: format!("Failed to create tokio runtime: {message}"),
        })
}

/// Execute a future in the tokio runtime and await its result
///
/// Usable from any executor; the future itself always runs on tokio.
pub async fn run_in_tokio<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime()?.spawn(future);
    match handle.await {
        Ok(result) => Ok(result),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(Error::Invalid {
            message: format!("Tokio task cancelled: {e}"),
        }),
    }
}

/// Block on a future synchronously
///
/// **Warning**: This blocks the current thread and must not be called from
/// inside the runtime itself.
pub fn block_on<F, T>(future: F) -> Result<T>
where
    F: Future<Output = T>,
{
    Ok(get_runtime()?.block_on(future))
}
