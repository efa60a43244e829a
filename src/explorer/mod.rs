//! Explorer - Client-Side YC Dataset Exploration
//!
//! Load once, then filter, paginate, summarize and export in memory.
//!
//! ```text
//! Dataset ──► filter(FilterState) ──► paginate(page, size) ──► page rows
//!    │                  │
//!    ├──► compute_stats ┴──► export_snapshot ──► DocumentExporter::save
//!    └──► derive_category_options
//! ```

mod dataset;
mod export;
mod filter;
mod pagination;
mod state;
mod stats;

pub use dataset::*;
pub use export::*;
pub use filter::*;
pub use pagination::*;
pub use state::*;
pub use stats::*;
