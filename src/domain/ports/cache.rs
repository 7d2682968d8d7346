//! Cache port - abstraction over the data grid's client API
//!
//! The grid owns membership, replication and storage. The clearer only needs
//! region lookup, the root-region catalog and key removal, so that is all
//! these traits expose.

use thiserror::Error;

use crate::domain::value_objects::{KeyConstraint, RegionKey};

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised by the grid client
#[derive(Error, Debug)]
pub enum GridError {
    /// Region was destroyed between lookup and use
    #[error("region {region} has been destroyed")]
    RegionDestroyed { region: String },

    /// Grid (or the local handle to it) is unusable
    #[error("grid unavailable: {message}")]
    Unavailable { message: String },

    /// A single grid operation failed
    #[error("{operation} failed on region {region}: {message}")]
    Operation {
        operation: &'static str,
        region: String,
        message: String,
    },
}

/// A named key-value container in the grid
pub trait Region {
    /// Simple name of the region
    fn name(&self) -> &str;

    /// Full path of the region (root regions are `/<name>`)
    fn full_path(&self) -> String {
        format!("/{}", self.name())
    }

    /// Declared key type, if the region has one
    fn key_constraint(&self) -> Option<KeyConstraint>;

    /// Snapshot of the keys currently in the region
    fn keys(&self) -> GridResult<Vec<RegionKey>>;

    /// Remove one entry. Removing an absent key is not an error.
    fn remove(&self, key: &RegionKey) -> GridResult<()>;

    /// Remove a batch of entries in one call
    fn remove_all(&self, keys: &[RegionKey]) -> GridResult<()>;
}

/// Handle to a running cache
///
/// Implementations:
/// - `InMemoryCache` - process-local grid, loaded from a JSON snapshot
/// - test mocks in the use case modules
pub trait Cache {
    type Region: Region;

    /// Look up a region by name or full path
    fn region(&self, name: &str) -> GridResult<Option<Self::Region>>;

    /// All root-level regions (subregions are not included)
    fn root_regions(&self) -> GridResult<Vec<Self::Region>>;
}

impl<C: Cache + ?Sized> Cache for &C {
    type Region = C::Region;

    fn region(&self, name: &str) -> GridResult<Option<Self::Region>> {
        (**self).region(name)
    }

    fn root_regions(&self) -> GridResult<Vec<Self::Region>> {
        (**self).root_regions()
    }
}
