//! Random - Seeded Visual Randomness
//!
//! ```text
//! seed ──► Mulberry32 ──► SeededRandomSource ──► next / next_int / next_float
//!                                │
//!                                ├──► pick / shuffle
//!                                └──► accent_color / rotation / jitter / particle_offset
//! ```

mod mulberry32;
mod source;
mod visual;

pub use mulberry32::*;
pub use source::*;
pub use visual::*;
