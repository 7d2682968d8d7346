//! Value Objects
//!
//! Immutable types shared by ports, services and use cases.

mod key_constraint;
mod outcome;
mod region_key;
mod region_pattern;

pub use key_constraint::KeyConstraint;
pub use outcome::ClearOutcome;
pub use region_key::RegionKey;
pub use region_pattern::{PatternError, RegionMatcher, RegionNamePattern};
