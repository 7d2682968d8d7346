//! Common test utilities for gridclear CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp project and home
//! - Fixtures: Reusable snapshot content

pub mod env;
pub mod fixtures;

pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
