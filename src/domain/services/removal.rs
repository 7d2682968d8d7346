//! Entry Removal Strategies
//!
//! Regions whose keys are declared as strings are emptied with bulk removes
//! in fixed-size batches. Any other key type, or no declared type at all, is
//! removed one key at a time.

use std::fmt;

use crate::domain::ports::{GridResult, Region};
use crate::domain::value_objects::{KeyConstraint, RegionKey};

/// Keys per bulk-remove call unless configured otherwise
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// How a region's entries get removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalStrategy {
    /// One `remove_all` call per slice of `batch_size` keys
    Batched { batch_size: usize },
    /// One `remove` call per key
    OneByOne,
}

impl RemovalStrategy {
    /// Pick the strategy for a region's declared key type
    pub fn for_constraint(constraint: Option<&KeyConstraint>, batch_size: usize) -> Self {
        match constraint {
            Some(KeyConstraint::String) => Self::Batched {
                batch_size: batch_size.max(1),
            },
            _ => Self::OneByOne,
        }
    }

    /// Remove `keys` from `region`.
    ///
    /// Batches are linear slices `[i * size, (i + 1) * size)`; the last one may
    /// be partial and an empty slice is never sent.
    pub fn remove<R: Region + ?Sized>(&self, region: &R, keys: &[RegionKey]) -> GridResult<()> {
        match *self {
            Self::Batched { batch_size } => {
                for batch in keys.chunks(batch_size.max(1)) {
                    region.remove_all(batch)?;
                }
            }
            Self::OneByOne => {
                for key in keys {
                    region.remove(key)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for RemovalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batched { batch_size } => write!(f, "batched({})", batch_size),
            Self::OneByOne => f.write_str("one-by-one"),
        }
    }
}
