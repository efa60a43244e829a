//! Domain - Pure Data Structures
//!
//! These types don't depend on the runtime and represent the dataset,
//! its derived summaries, and the application configuration.

pub mod company;
pub mod config;
pub mod summary;
