//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ClearRegionsUseCase` - Resolve region names and empty each region
//! - `ListRegionsUseCase` - Preview what a clear request would touch

pub mod clear;
pub mod list;

pub use clear::{ClearOptions, ClearRegionsUseCase, ClearSummary};
pub use list::{ListRegionsUseCase, ListResult, RegionDescription};
