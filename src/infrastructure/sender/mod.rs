//! Result Sender Implementations
//!
//! Provides concrete implementations of ResultSender:
//! - TextResultSender: one human-readable line per outcome
//! - JsonResultSender: NDJSON output for CI/automation
//! - CollectingResultSender: in-memory, for embedding and tests

mod collecting;
mod json;
mod text;

pub use collecting::CollectingResultSender;
pub use json::{outcome_to_json, JsonResultSender};
pub use text::TextResultSender;
