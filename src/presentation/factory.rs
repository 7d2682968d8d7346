//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{ClearRegionsUseCase, ListRegionsUseCase};
use crate::config::OutputFormat;
use crate::domain::ports::ResultSender;
use crate::infrastructure::{InMemoryCache, JsonResultSender, TextResultSender};

/// Type alias for the concrete ClearRegionsUseCase used by the CLI
pub type ConcreteClearUseCase<'a> = ClearRegionsUseCase<&'a InMemoryCache, Box<dyn ResultSender>>;

/// Type alias for the concrete ListRegionsUseCase used by the CLI
pub type ConcreteListUseCase<'a> = ListRegionsUseCase<&'a InMemoryCache>;

/// Result sender writing to stdout in the given format
pub fn create_result_sender(format: OutputFormat) -> Box<dyn ResultSender> {
    match format {
        OutputFormat::Text => Box::new(TextResultSender::stdout()),
        OutputFormat::Json => Box::new(JsonResultSender::stdout()),
    }
}

/// Create a clear use case over a loaded grid
pub fn create_clear_use_case(
    cache: &InMemoryCache,
    format: OutputFormat,
) -> ConcreteClearUseCase<'_> {
    ClearRegionsUseCase::new(cache, create_result_sender(format))
}

pub fn create_list_use_case(cache: &InMemoryCache) -> ConcreteListUseCase<'_> {
    ListRegionsUseCase::new(cache)
}
