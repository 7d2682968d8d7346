//! Clear Use Case
//!
//! Orchestrates region clearing: resolve names, then empty each region in
//! turn. Every region yields exactly one outcome; nothing escapes `execute`.

use tracing::{error, info};

use crate::domain::ports::{Cache, GridResult, Region, ResultSender};
use crate::domain::services::{report_failure, resolve, RemovalStrategy};
use crate::domain::value_objects::ClearOutcome;

use super::options::ClearOptions;
use super::result::ClearSummary;

/// Clear use case - removes every entry from the named regions
pub struct ClearRegionsUseCase<C, S>
where
    C: Cache,
    S: ResultSender,
{
    cache: C,
    sender: S,
}

impl<C, S> ClearRegionsUseCase<C, S>
where
    C: Cache,
    S: ResultSender,
{
    /// Create a new clear use case
    pub fn new(cache: C, sender: S) -> Self {
        Self { cache, sender }
    }

    /// Clear every region named by `names` (literals and glob patterns).
    ///
    /// Regions are processed sequentially in name order. A failure in one
    /// region is reported for that region and processing continues.
    pub fn execute<I, N>(&self, names: I, options: &ClearOptions) -> ClearSummary
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut summary = ClearSummary::new();
        let resolution = resolve(&self.cache, names);

        for failure in &resolution.failures {
            summary.push(report_failure(
                &self.sender,
                &failure.subject,
                &failure.error,
            ));
        }

        for name in &resolution.regions {
            summary.push(self.clear_region(name, options));
        }

        info!(
            regions = summary.len(),
            removed = summary.removed_total(),
            "clear finished"
        );
        summary
    }

    fn clear_region(&self, name: &str, options: &ClearOptions) -> ClearOutcome {
        info!(region = name, "processing region");

        let region = match self.cache.region(name) {
            Ok(Some(region)) => region,
            Ok(None) => {
                error!("region {} does not exist.", name);
                let outcome = ClearOutcome::NotFound {
                    region: name.to_string(),
                };
                self.sender.send_result(&outcome);
                return outcome;
            }
            Err(e) => return report_failure(&self.sender, name, &e),
        };

        match self.remove_entries(&region, options) {
            Ok(count) => {
                let region = region.name().to_string();
                let outcome = if options.dry_run {
                    ClearOutcome::WouldRemove { region, count }
                } else {
                    ClearOutcome::Removed { region, count }
                };
                self.sender.send_result(&outcome);
                outcome
            }
            Err(e) => report_failure(&self.sender, region.name(), &e),
        }
    }

    /// Remove all entries, returning the key count taken before removal
    fn remove_entries(&self, region: &C::Region, options: &ClearOptions) -> GridResult<usize> {
        info!(region = region.name(), path = %region.full_path(), "got region");

        let keys = region.keys()?;
        let count = keys.len();

        let constraint = region.key_constraint();
        let strategy = RemovalStrategy::for_constraint(constraint.as_ref(), options.batch_size);

        if options.dry_run {
            info!(region = region.name(), count, %strategy, "dry run, nothing removed");
            return Ok(count);
        }

        info!(
            region = region.name(),
            count,
            %strategy,
            "removing {} entries from {} region.",
            count,
            region.name()
        );
        strategy.remove(region, &keys)?;
        info!(region = region.name(), count, "removed {} entries", count);

        Ok(count)
    }
}
