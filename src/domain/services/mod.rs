//! Domain Services
//!
//! Stateless logic shared by the use cases.

pub mod error_report;
pub mod pattern_resolver;
pub mod removal;

pub use error_report::{report_failure, strip_error};
pub use pattern_resolver::{
    find_regions_like, partition, resolve, Resolution, ResolveError, ResolveFailure,
};
pub use removal::{RemovalStrategy, DEFAULT_BATCH_SIZE};
