//! Domain Layer
//!
//! Region clearing logic without any dependency on a concrete grid client.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (RegionNamePattern, KeyConstraint, ClearOutcome)
//! - `services/` - Pattern resolution, removal strategies, failure reporting
//! - `ports/` - Interface definitions for the grid and the result sink
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never talks to a grid or terminal directly
//! 2. **Ports & Adapters** - Grid access and result delivery go through traits

pub mod ports;
pub mod services;
pub mod value_objects;
