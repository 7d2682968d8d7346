//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command-line definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Rendering for `list` results
//!
//! ## Usage
//!
//! ```ignore
//! use gridclear::presentation::factory;
//!
//! let use_case = factory::create_clear_use_case(&cache, OutputFormat::Text);
//! let summary = use_case.execute(&names, &options);
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_clear_use_case, create_list_use_case, create_result_sender};
