//! gridclear CLI - clear data-grid regions
//!
//! Usage: gridclear [OPTIONS] <COMMAND>
//!
//! Commands:
//!   clear   Remove every entry from the named regions
//!   list    Describe the regions a name list resolves to

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use gridclear::config::{self, ConfigWarning, OutputFormat};
use gridclear::presentation::{Cli, Commands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let (mut config, warnings) = config::load_or_default(cli.config.as_deref(), &cwd)?;

    init_tracing(&config.log.level, cli.verbose);
    for warning in &warnings {
        print_config_warning(warning);
    }

    // CLI flags take precedence over env and config files
    if let Some(snapshot) = cli.snapshot {
        config.grid.snapshot = snapshot;
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    let ok = match cli.command {
        Commands::Clear {
            names,
            batch_size,
            dry_run,
        } => commands::clear::cmd_clear(&config, &names, batch_size, dry_run)?,
        Commands::List { patterns } => commands::list::cmd_list(&config, &patterns)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(level: &str, verbose: u8) {
    let default_directive = match verbose {
        0 => level,
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_config_warning(warning: &ConfigWarning) {
    if warning.file.as_os_str() == "<env>" {
        warn!(
            key = %warning.key,
            "ignored invalid environment value, expected {}",
            warning.suggestion.as_deref().unwrap_or("a valid value")
        );
        return;
    }

    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };

    match &warning.suggestion {
        Some(suggestion) => warn!(
            key = %warning.key,
            "unknown config key in {} (did you mean '{}'?)",
            location,
            suggestion
        ),
        None => warn!(key = %warning.key, "unknown config key in {}", location),
    }
}
