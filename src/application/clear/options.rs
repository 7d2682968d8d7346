//! Clear options

use crate::domain::services::DEFAULT_BATCH_SIZE;
use crate::error::{GridClearError, GridClearResult};

/// Options for the clear command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearOptions {
    /// Keys per bulk-remove call for string-keyed regions
    pub batch_size: usize,
    /// Count entries but remove nothing
    pub dry_run: bool,
}

impl Default for ClearOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            dry_run: false,
        }
    }
}

impl ClearOptions {
    /// Create new clear options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn validate(&self) -> GridClearResult<()> {
        if self.batch_size == 0 {
            return Err(GridClearError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }
}
