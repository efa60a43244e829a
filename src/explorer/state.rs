//! Explorer state
//!
//! Holds the loaded dataset, the filter state and the load lifecycle for
//! one explorer view. Views are recomputed from scratch on every call.
//!
//! ```text
//! begin_load() ──► Loading ──► finish_load(ticket, Ok)  ──► Ready
//!                          └─► finish_load(ticket, Err) ──► Error
//! stale tickets are ignored
//! ```

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::dataset::Dataset;
use super::export::export_snapshot;
use super::filter::{FilterState, filter};
use super::pagination::{PageItem, Pagination, paginate, total_pages};
use super::stats::{available_category_options, compute_stats, derive_category_options};
use crate::domain::company::CompanyRecord;
use crate::domain::summary::{DatasetStats, ExportSnapshot};
use crate::error::Result;

/// Dataset load lifecycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A load is in flight
    Loading,
    /// Dataset available
    Ready,
    /// Last load failed
    Error(Arc<str>),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Identity of one load request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// State for one explorer view
#[derive(Debug, Clone)]
pub struct ExplorerState {
    dataset: Dataset,
    filter: FilterState,
    load_state: LoadState,
    generation: u64,
}

impl ExplorerState {
    pub fn new(page_size: usize) -> Self {
        Self {
            dataset: Dataset::default(),
            filter: FilterState::new(page_size),
            load_state: LoadState::Idle,
            generation: 0,
        }
    }

    /// Ready state over an already-loaded dataset
    pub fn with_dataset(dataset: impl Into<Dataset>, page_size: usize) -> Self {
        let mut state = Self::new(page_size);
        state.dataset = dataset.into();
        state.load_state = LoadState::Ready;
        state
    }

    // ==================== Load lifecycle ====================

    /// Start a load; any earlier in-flight load becomes stale
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.load_state = LoadState::Loading;
        self.dataset = Dataset::default();
        self.filter.set_page(1, 1);
        debug!(generation = self.generation, "Dataset load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply a load result; returns `false` when `ticket` is stale
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<CompanyRecord>>) -> bool {
        if ticket.generation != self.generation {
            warn!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding stale dataset load"
            );
            return false;
        }

        match result {
            Ok(rows) => {
                self.dataset = Dataset::new(rows);
                info!(rows = self.dataset.len(), "Dataset ready");
                self.load_state = LoadState::Ready;
                self.clamp_page();
            }
            Err(e) => {
                error!(error = %e, "Failed to load dataset");
                self.dataset = Dataset::default();
                self.load_state = LoadState::Error(e.to_string().into());
            }
        }
        true
    }

    // ==================== Getters ====================

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Full dataset; empty unless `Ready`
    pub fn records(&self) -> &[CompanyRecord] {
        if self.load_state.is_ready() {
            self.dataset.all()
        } else {
            &[]
        }
    }

    /// Rows passing the current filter, in dataset order
    pub fn filtered(&self) -> Vec<&CompanyRecord> {
        let rows = filter(self.records(), &self.filter);
        debug!(
            matched = rows.len(),
            total = self.records().len(),
            "Filter recomputed"
        );
        rows
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.filter.page_size())
    }

    pub fn current_page(&self) -> usize {
        self.filter.current_page()
    }

    /// Rows of the current page
    pub fn page_rows(&self) -> Vec<&CompanyRecord> {
        let filtered = self.filtered();
        paginate(&filtered, self.filter.current_page(), self.filter.page_size()).to_vec()
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            self.filter.current_page(),
            self.filter.page_size(),
            self.filtered().len(),
        )
    }

    pub fn page_buttons(&self) -> Vec<PageItem> {
        self.pagination().buttons()
    }

    /// Stats over the full dataset
    pub fn stats(&self) -> DatasetStats {
        compute_stats(self.records())
    }

    pub fn category_options(&self) -> Vec<String> {
        derive_category_options(self.records())
    }

    /// Category options not yet selected
    pub fn available_category_options(&self) -> Vec<String> {
        let options = self.category_options();
        available_category_options(&options, self.filter.selected_categories())
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Export document: full-dataset stats with the filtered rows
    pub fn export_snapshot(&self, generated_at: DateTime<Utc>) -> ExportSnapshot {
        export_snapshot(self.filtered(), &self.stats(), generated_at)
    }

    // ==================== Filter mutations ====================

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.set_search_term(term);
    }

    pub fn add_category(&mut self, category: &str) -> bool {
        self.filter.add_category(category)
    }

    pub fn remove_category(&mut self, category: &str) -> bool {
        self.filter.remove_category(category)
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    // ==================== Page navigation ====================

    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.filter.set_page(page, total);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.current_page().saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.current_page() + 1);
    }

    fn clamp_page(&mut self) {
        self.set_page(self.current_page());
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PAGE_SIZE)
    }
}
