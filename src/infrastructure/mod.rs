//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `grid/` - In-memory grid and its JSON snapshot repository
//! - `sender/` - Result senders (text, NDJSON, collecting)

pub mod grid;
pub mod sender;

// Re-export for convenience
pub use grid::{InMemoryCache, InMemoryRegion, JsonSnapshotRepository};
pub use sender::{CollectingResultSender, JsonResultSender, TextResultSender};
