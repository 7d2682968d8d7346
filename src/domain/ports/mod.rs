//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cache;
pub mod result_sender;

pub use cache::{Cache, GridError, GridResult, Region};
pub use result_sender::ResultSender;
