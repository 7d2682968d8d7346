//! Clear Use Case
//!
//! Orchestrates the clearing of grid regions.
//!
//! This module handles:
//! - Expanding glob patterns against the root-region catalog
//! - Choosing batched or per-key removal from the region's key constraint
//! - Reporting exactly one outcome per resolved region

mod options;
mod result;
mod use_case;

pub use options::ClearOptions;
pub use result::ClearSummary;
pub use use_case::ClearRegionsUseCase;
