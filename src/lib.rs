//! Folio Library
//!
//! This crate provides the core of Folio, an explorer for the Y Combinator
//! company dataset: deterministic seeded randomness for cosmetic variation,
//! and client-side filtering, pagination, summary stats and export.

pub mod constants;
pub mod domain;
pub mod error;
pub mod explorer;
pub mod helpers;
pub mod random;
pub mod services;
pub mod utils;
