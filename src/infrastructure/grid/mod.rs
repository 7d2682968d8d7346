//! Grid Implementations
//!
//! - `InMemoryCache` / `InMemoryRegion`: process-local `Cache` port
//! - `JsonSnapshotRepository`: loads and persists an in-memory grid

mod memory;
mod snapshot;

pub use memory::{InMemoryCache, InMemoryRegion};
pub use snapshot::{JsonSnapshotRepository, SnapshotLock};
