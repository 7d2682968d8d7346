//! List Use Case
//!
//! Previews what a clear request would touch: resolves names exactly like
//! `clear` and describes each region without removing anything.

use crate::domain::ports::{Cache, Region};
use crate::domain::services::{resolve, strip_error, RemovalStrategy};
use crate::domain::value_objects::KeyConstraint;

/// What `clear` would see for one resolved name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionDescription {
    pub name: String,
    pub exists: bool,
    pub full_path: Option<String>,
    pub key_constraint: Option<KeyConstraint>,
    pub entry_count: Option<usize>,
    pub strategy: Option<RemovalStrategy>,
    /// Stripped error from lookup or key listing
    pub error: Option<String>,
}

impl RegionDescription {
    fn missing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            exists: false,
            full_path: None,
            key_constraint: None,
            entry_count: None,
            strategy: None,
            error: None,
        }
    }

    fn failed(name: &str, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::missing(name)
        }
    }
}

/// Result of a list operation
#[derive(Debug, Clone, Default)]
pub struct ListResult {
    pub regions: Vec<RegionDescription>,
    /// Patterns (or pattern groups) that could not be resolved
    pub errors: Vec<String>,
}

/// List use case - describes the regions a name list resolves to
pub struct ListRegionsUseCase<C: Cache> {
    cache: C,
}

impl<C: Cache> ListRegionsUseCase<C> {
    pub fn new(cache: C) -> Self {
        Self { cache }
    }

    /// Describe the regions matched by `names`; no names means every root region
    pub fn execute<N: AsRef<str>>(&self, names: &[N], batch_size: usize) -> ListResult {
        let resolution = if names.is_empty() {
            resolve(&self.cache, ["*"])
        } else {
            resolve(&self.cache, names.iter().map(AsRef::as_ref))
        };

        let mut result = ListResult {
            errors: resolution
                .failures
                .iter()
                .map(|f| format!("{}: {}", f.subject, strip_error(&f.error)))
                .collect(),
            ..Default::default()
        };

        for name in &resolution.regions {
            result.regions.push(self.describe(name, batch_size));
        }

        result
    }

    fn describe(&self, name: &str, batch_size: usize) -> RegionDescription {
        let region = match self.cache.region(name) {
            Ok(Some(region)) => region,
            Ok(None) => return RegionDescription::missing(name),
            Err(e) => return RegionDescription::failed(name, strip_error(&e)),
        };

        let key_constraint = region.key_constraint();
        let strategy = RemovalStrategy::for_constraint(key_constraint.as_ref(), batch_size);
        let (entry_count, error) = match region.keys() {
            Ok(keys) => (Some(keys.len()), None),
            Err(e) => (None, Some(strip_error(&e))),
        };

        RegionDescription {
            name: region.name().to_string(),
            exists: true,
            full_path: Some(region.full_path()),
            key_constraint,
            entry_count,
            strategy: Some(strategy),
            error,
        }
    }
}
