//! List command handler

use std::io::Write;

use anyhow::{Context, Result};

use gridclear::config::Config;
use gridclear::infrastructure::JsonSnapshotRepository;
use gridclear::presentation::{factory, output};

/// Execute the list command. Returns whether every pattern resolved.
pub fn cmd_list(config: &Config, patterns: &[String]) -> Result<bool> {
    let repo = JsonSnapshotRepository::new(&config.grid.snapshot);
    let cache = {
        let _lock = repo
            .lock()
            .with_context(|| format!("failed to lock snapshot {}", repo.path().display()))?;
        repo.load()
            .with_context(|| format!("failed to load snapshot {}", repo.path().display()))?
    };

    let result = factory::create_list_use_case(&cache).execute(patterns, config.clear.batch_size);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output::render_list(&result, config.output.format).as_bytes())?;
    stdout.flush()?;

    Ok(result.errors.is_empty())
}
