//! JSON Snapshot Repository
//!
//! Loads an `InMemoryCache` from a JSON snapshot and writes it back after a
//! clear. Writers serialize on an exclusive lock file next to the snapshot.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::ports::Region;
use crate::domain::value_objects::{KeyConstraint, RegionKey};
use crate::error::{GridClearError, GridClearResult};

use super::memory::{InMemoryCache, InMemoryRegion};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotEntry {
    key: RegionKey,
    #[serde(default)]
    value: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotRegion {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key_constraint: Option<KeyConstraint>,
    #[serde(default)]
    entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    regions: Vec<SnapshotRegion>,
}

/// Exclusive lock on a snapshot, released on drop
pub struct SnapshotLock {
    file: fs::File,
}

impl Drop for SnapshotLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }

    /// Block until this process holds the snapshot lock
    pub fn lock(&self) -> GridClearResult<SnapshotLock> {
        let lock_path = self.lock_path();
        let lock_err = |e: std::io::Error| GridClearError::Lock {
            path: lock_path.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(lock_err)?;
        }
        let file = fs::File::create(&lock_path).map_err(lock_err)?;
        file.lock_exclusive().map_err(lock_err)?;

        Ok(SnapshotLock { file })
    }

    pub fn load(&self) -> GridClearResult<InMemoryCache> {
        let content = fs::read_to_string(&self.path).map_err(|e| GridClearError::Snapshot {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let snapshot: SnapshotFile =
            serde_json::from_str(&content).map_err(|e| GridClearError::Snapshot {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        self.build_cache(snapshot)
    }

    /// Write the cache back, replacing the snapshot atomically
    pub fn save(&self, cache: &InMemoryCache) -> GridClearResult<()> {
        let snapshot = self.snapshot_of(cache)?;
        let mut content = serde_json::to_string_pretty(&snapshot)?;
        content.push('\n');

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| GridClearError::Io(e.error))?;

        Ok(())
    }

    fn build_cache(&self, snapshot: SnapshotFile) -> GridClearResult<InMemoryCache> {
        let invalid = |message: String| GridClearError::Snapshot {
            path: self.path.clone(),
            message,
        };

        let mut cache = InMemoryCache::new();
        let mut names = BTreeSet::new();

        for region in snapshot.regions {
            if !names.insert(region.name.clone()) {
                return Err(invalid(format!("duplicate region {}", region.name)));
            }

            let handle = InMemoryRegion::new(region.name, region.key_constraint);
            let mut keys = BTreeSet::new();
            for entry in region.entries {
                if !keys.insert(entry.key.clone()) {
                    return Err(invalid(format!(
                        "duplicate key {} in region {}",
                        entry.key,
                        handle.name()
                    )));
                }
                handle
                    .put(entry.key, entry.value)
                    .map_err(|e| invalid(e.to_string()))?;
            }
            cache.add_region(handle);
        }

        Ok(cache)
    }

    fn snapshot_of(&self, cache: &InMemoryCache) -> GridClearResult<SnapshotFile> {
        let mut regions = Vec::new();

        for region in cache.regions() {
            let entries = region
                .snapshot()
                .map_err(|e| GridClearError::Snapshot {
                    path: self.path.clone(),
                    message: e.to_string(),
                })?
                .into_iter()
                .map(|(key, value)| SnapshotEntry { key, value })
                .collect();

            regions.push(SnapshotRegion {
                name: region.name().to_string(),
                key_constraint: region.key_constraint(),
                entries,
            });
        }

        Ok(SnapshotFile { regions })
    }
}
