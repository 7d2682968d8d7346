//! In-Memory Grid
//!
//! Process-local implementation of the `Cache` and `Region` ports. Region
//! handles are cheap clones sharing one entry map, so a handle obtained from
//! `root_regions()` and one from `region()` observe the same data.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::{Cache, GridError, GridResult, Region};
use crate::domain::value_objects::{KeyConstraint, RegionKey};

type Entries = BTreeMap<RegionKey, serde_json::Value>;

#[derive(Debug)]
struct RegionData {
    name: String,
    key_constraint: Option<KeyConstraint>,
    entries: Mutex<Entries>,
    bulk_removes: AtomicUsize,
    single_removes: AtomicUsize,
    destroyed: AtomicBool,
}

/// Handle to an in-memory region
#[derive(Debug, Clone)]
pub struct InMemoryRegion {
    inner: Arc<RegionData>,
}

impl InMemoryRegion {
    pub fn new(name: impl Into<String>, key_constraint: Option<KeyConstraint>) -> Self {
        Self {
            inner: Arc::new(RegionData {
                name: name.into(),
                key_constraint,
                entries: Mutex::new(Entries::new()),
                bulk_removes: AtomicUsize::new(0),
                single_removes: AtomicUsize::new(0),
                destroyed: AtomicBool::new(false),
            }),
        }
    }

    fn entries(&self) -> GridResult<MutexGuard<'_, Entries>> {
        if self.is_destroyed() {
            return Err(GridError::RegionDestroyed {
                region: self.inner.name.clone(),
            });
        }
        self.inner.entries.lock().map_err(|_| GridError::Unavailable {
            message: format!("region {} is poisoned", self.inner.name),
        })
    }

    /// Insert or replace an entry, enforcing the key constraint
    pub fn put(&self, key: RegionKey, value: serde_json::Value) -> GridResult<()> {
        if self.inner.key_constraint == Some(KeyConstraint::String) && !key.is_string() {
            return Err(GridError::Operation {
                operation: "put",
                region: self.inner.name.clone(),
                message: format!("key {} violates key constraint string", key),
            });
        }
        self.entries()?.insert(key, value);
        Ok(())
    }

    /// Entries in key order
    pub fn snapshot(&self) -> GridResult<Vec<(RegionKey, serde_json::Value)>> {
        Ok(self
            .entries()?
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }

    /// Number of entries (zero if the region is poisoned)
    pub fn len(&self) -> usize {
        self.entries().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once the region was destroyed; every data operation then fails
    pub fn is_destroyed(&self) -> bool {
        self.inner.destroyed.load(Ordering::Acquire)
    }

    /// Bulk-remove calls served so far
    pub fn bulk_remove_calls(&self) -> usize {
        self.inner.bulk_removes.load(Ordering::Relaxed)
    }

    /// Single-key remove calls served so far
    pub fn single_remove_calls(&self) -> usize {
        self.inner.single_removes.load(Ordering::Relaxed)
    }
}

impl Region for InMemoryRegion {
    fn name(&self) -> &str {
        &self.inner.name
    }

    fn key_constraint(&self) -> Option<KeyConstraint> {
        self.inner.key_constraint.clone()
    }

    fn keys(&self) -> GridResult<Vec<RegionKey>> {
        Ok(self.entries()?.keys().cloned().collect())
    }

    fn remove(&self, key: &RegionKey) -> GridResult<()> {
        self.inner.single_removes.fetch_add(1, Ordering::Relaxed);
        self.entries()?.remove(key);
        Ok(())
    }

    fn remove_all(&self, keys: &[RegionKey]) -> GridResult<()> {
        self.inner.bulk_removes.fetch_add(1, Ordering::Relaxed);
        let mut entries = self.entries()?;
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }
}

/// In-memory cache holding root regions by name
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    regions: BTreeMap<String, InMemoryRegion>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root region, replacing any region with the same name
    pub fn add_region(&mut self, region: InMemoryRegion) {
        self.regions.insert(region.name().to_string(), region);
    }

    /// Drop a root region. Handles already given out keep failing with
    /// `RegionDestroyed`.
    pub fn destroy_region(&mut self, name: &str) -> bool {
        match self.regions.remove(name) {
            Some(region) => {
                region.inner.destroyed.store(true, Ordering::Release);
                true
            }
            None => false,
        }
    }

    pub fn regions(&self) -> impl Iterator<Item = &InMemoryRegion> {
        self.regions.values()
    }
}

impl Cache for InMemoryCache {
    type Region = InMemoryRegion;

    fn region(&self, name: &str) -> GridResult<Option<InMemoryRegion>> {
        let name = name.strip_prefix('/').unwrap_or(name);
        Ok(self.regions.get(name).cloned())
    }

    fn root_regions(&self) -> GridResult<Vec<InMemoryRegion>> {
        Ok(self.regions.values().cloned().collect())
    }
}
