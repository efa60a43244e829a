//! Service Layer
//!
//! Async I/O around the pure explorer core: fetching the dataset and
//! bridging it into synchronous hosts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             ExplorerSession             │
//! │  ┌──────────────┐  ┌─────────────────┐  │
//! │  │    loader    │  │     runtime     │  │
//! │  │ (http/file)  │  │ (tokio bridge)  │  │
//! │  └──────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────┘
//!                      │
//!                      ▼ begin_load / finish_load
//! ┌─────────────────────────────────────────┐
//! │              ExplorerState              │
//! └─────────────────────────────────────────┘
//! ```

mod loader;
mod runtime;
mod session;

pub use loader::*;
pub use runtime::*;
pub use session::*;
