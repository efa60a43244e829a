//! Explorer Session
//!
//! Shares one `ExplorerState` between the host and in-flight loads. Each
//! reload takes a ticket before awaiting; when it resolves, the result is
//! applied only if no newer reload started in the meantime.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::loader::{DatasetSource, load};
use super::runtime::run_in_tokio;
use crate::domain::company::CompanyRecord;
use crate::error::Result;
use crate::explorer::ExplorerState;

/// Handle to a shared explorer state
#[derive(Clone, Debug, Default)]
pub struct ExplorerSession {
    state: Arc<Mutex<ExplorerState>>,
}

impl ExplorerSession {
    pub fn new(state: ExplorerState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Lock the state for reading or mutation
    pub fn state(&self) -> MutexGuard<'_, ExplorerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load `source` on the tokio runtime and apply it if still current
    ///
    /// Returns whether the result was applied.
    pub async fn reload(&self, source: &DatasetSource) -> bool {
        let source = source.clone();
        self.reload_with(async move {
            run_in_tokio(async move { load(&source).await }).await?
        })
        .await
    }

    /// Drive any dataset future through the ticketed load lifecycle
    pub async fn reload_with<F>(&self, fetch: F) -> bool
    where
        F: Future<Output = Result<Vec<CompanyRecord>>>,
    {
        let ticket = self.state().begin_load();
        let result = fetch.await;
        self.state().finish_load(ticket, result)
    }
}
