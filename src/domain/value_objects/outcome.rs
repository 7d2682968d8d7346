//! Clear Outcome Value Object
//!
//! One outcome is produced, and sent, for every region a clear request
//! resolves to.

use std::fmt;

/// Result of clearing a single region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Entries were removed; `count` is the pre-removal key count
    Removed { region: String, count: usize },

    /// Dry run: entries that would have been removed
    WouldRemove { region: String, count: usize },

    /// The region is not in the cache
    NotFound { region: String },

    /// Lookup or removal failed; `message` is already stripped
    Failed { region: String, message: String },
}

impl ClearOutcome {
    pub fn region(&self) -> &str {
        match self {
            Self::Removed { region, .. }
            | Self::WouldRemove { region, .. }
            | Self::NotFound { region }
            | Self::Failed { region, .. } => region,
        }
    }

    /// Number of entries removed, if any were
    pub fn removed_count(&self) -> Option<usize> {
        match self {
            Self::Removed { count, .. } => Some(*count),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Failed { .. })
    }
}

impl fmt::Display for ClearOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed { region, count } => {
                write!(f, "Removed from region {}: {}", region, count)
            }
            Self::WouldRemove { region, count } => {
                write!(f, "Would remove from region {}: {}", region, count)
            }
            Self::NotFound { region } => write!(f, "region {} does not exist.", region),
            Self::Failed { region, message } => {
                write!(f, "Failed to clear region {}: {}", region, message)
            }
        }
    }
}
