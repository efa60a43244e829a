//! Utils - Display Formatting for Hosts

pub mod format;
