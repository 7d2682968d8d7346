//! Clear command handler
//!
//! Loads the grid snapshot under its lock, clears the requested regions and
//! writes the snapshot back.

use anyhow::{Context, Result};
use tracing::info;

use gridclear::application::ClearOptions;
use gridclear::config::Config;
use gridclear::infrastructure::JsonSnapshotRepository;
use gridclear::presentation::factory;

/// Execute the clear command. Returns whether every region was cleared.
pub fn cmd_clear(
    config: &Config,
    names: &[String],
    batch_size: Option<usize>,
    dry_run: bool,
) -> Result<bool> {
    let options = ClearOptions::new()
        .with_batch_size(batch_size.unwrap_or(config.clear.batch_size))
        .with_dry_run(dry_run);
    options.validate()?;

    let repo = JsonSnapshotRepository::new(&config.grid.snapshot);
    let _lock = repo
        .lock()
        .with_context(|| format!("failed to lock snapshot {}", repo.path().display()))?;
    let cache = repo
        .load()
        .with_context(|| format!("failed to load snapshot {}", repo.path().display()))?;

    let use_case = factory::create_clear_use_case(&cache, config.output.format);
    let summary = use_case.execute(names, &options);

    if dry_run {
        info!(snapshot = %repo.path().display(), "dry run, snapshot left unchanged");
    } else {
        repo.save(&cache)
            .with_context(|| format!("failed to save snapshot {}", repo.path().display()))?;
    }

    Ok(summary.is_success())
}
