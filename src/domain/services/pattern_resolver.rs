//! Region Pattern Resolver
//!
//! Expands user-supplied region names into the set of regions to process.
//! Literal names pass through untouched; glob names are matched against the
//! root-region catalog fetched once per resolution.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::domain::ports::{Cache, GridError, Region};
use crate::domain::value_objects::{PatternError, RegionMatcher, RegionNamePattern};

/// Why part of a request could not be resolved
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Catalog(#[from] GridError),
}

/// A resolution failure and the input it concerns
#[derive(Debug)]
pub struct ResolveFailure {
    /// Pattern text (or comma-joined patterns for catalog failures)
    pub subject: String,
    pub error: ResolveError,
}

/// Deduplicated region names plus whatever could not be resolved
#[derive(Debug, Default)]
pub struct Resolution {
    pub regions: BTreeSet<String>,
    pub failures: Vec<ResolveFailure>,
}

/// Split names into literals and glob patterns, keeping each name once
pub fn partition<I, S>(names: I) -> (BTreeSet<String>, Vec<RegionNamePattern>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut literals = BTreeSet::new();
    let mut globs: Vec<RegionNamePattern> = Vec::new();

    for name in names {
        match RegionNamePattern::parse(name.as_ref()) {
            RegionNamePattern::Literal(name) => {
                literals.insert(name);
            }
            glob => {
                if !globs.contains(&glob) {
                    globs.push(glob);
                }
            }
        }
    }

    (literals, globs)
}

/// Match patterns against the root-region catalog.
///
/// Zero matches is not an error. Patterns that fail to compile are reported
/// in `failures` and the rest are still matched.
pub fn find_regions_like<C: Cache>(cache: &C, patterns: &[RegionNamePattern]) -> Resolution {
    let mut resolution = Resolution::default();

    let mut matchers: Vec<RegionMatcher> = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        match pattern.compile() {
            Ok(matcher) => matchers.push(matcher),
            Err(e) => resolution.failures.push(ResolveFailure {
                subject: pattern.as_str().to_string(),
                error: e.into(),
            }),
        }
    }

    if matchers.is_empty() {
        return resolution;
    }

    let catalog = match cache.root_regions() {
        Ok(regions) => regions,
        Err(e) => {
            let subject = matchers
                .iter()
                .map(|m| m.pattern().as_str())
                .collect::<Vec<_>>()
                .join(", ");
            resolution.failures.push(ResolveFailure {
                subject,
                error: e.into(),
            });
            return resolution;
        }
    };

    for matcher in &matchers {
        for region in &catalog {
            if matcher.matches(region.name()) {
                resolution.regions.insert(region.name().to_string());
            }
        }
    }

    resolution
}

/// Resolve a raw request: literals plus every pattern match, deduplicated
pub fn resolve<C, I, S>(cache: &C, names: I) -> Resolution
where
    C: Cache,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (literals, globs) = partition(names);

    if globs.is_empty() {
        return Resolution {
            regions: literals,
            failures: Vec::new(),
        };
    }

    let mut resolution = find_regions_like(cache, &globs);
    resolution.regions.extend(literals);
    resolution
}
