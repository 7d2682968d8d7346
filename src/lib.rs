//! gridclear - clear data-grid regions by name or glob pattern
//!
//! Resolves region-name patterns against the root-region catalog, empties
//! each matching region (bulk removal in batches for string-keyed regions,
//! one key at a time otherwise) and reports one outcome per region.
//! A failure in one region never stops the others.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ClearOptions, ClearRegionsUseCase, ClearSummary, ListRegionsUseCase};
pub use config::Config;
pub use domain::ports::{Cache, GridError, Region, ResultSender};
pub use domain::value_objects::{ClearOutcome, KeyConstraint, RegionKey, RegionNamePattern};
pub use error::{GridClearError, GridClearResult};
