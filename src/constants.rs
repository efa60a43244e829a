//! Constants
//!
//! Centralized numeric ranges and thresholds shared by the random source and
//! the dataset explorer.

/// Mulberry32 state increment applied on every draw
pub const MULBERRY32_INCREMENT: u32 = 0x6D2B_79F5;

/// Divisor normalizing a 32-bit output into `[0, 1)`
pub const U32_RANGE: f64 = 4_294_967_296.0;

/// Entropy-derived seeds are drawn from `[0, ENTROPY_SEED_RANGE)`
pub const ENTROPY_SEED_RANGE: u32 = 1_000_000;

/// Tile rotation range (degrees)
pub const ROTATION_RANGE: (f64, f64) = (-0.3, 0.3);

/// Tile jitter range per axis (pixels)
pub const JITTER_RANGE: (f64, f64) = (-2.0, 2.0);

/// Particle offset range per axis (pixels)
pub const PARTICLE_OFFSET_RANGE: (f64, f64) = (-10.0, 10.0);

/// Default rows per explorer page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Above this many pages the page bar is condensed with ellipses
pub const MAX_VISIBLE_PAGES: usize = 7;

/// Number of categories reported as "top" in the stats
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Category options with more tokens than this are hidden from the filter menu
pub const CATEGORY_OPTION_MAX_WORDS: usize = 2;

/// Category options longer than this are hidden from the filter menu
pub const CATEGORY_OPTION_MAX_LEN: usize = 25;

/// Subcategory chips shown per company row
pub const DISPLAY_SUBCATEGORY_LIMIT: usize = 3;

/// Export file name prefix, completed as `yc-summary-<year>.json`
pub const EXPORT_FILE_PREFIX: &str = "yc-summary";

/// Default dataset location
pub const DEFAULT_DATASET_SOURCE: &str = "yc_batches.json";

/// Dataset HTTP request timeout
pub const LOAD_TIMEOUT_SECS: u64 = 30;
