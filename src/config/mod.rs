//! Configuration module for gridclear
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GRIDCLEAR_*)
//! 3. Project config (./gridclear.toml) or `--config PATH`
//! 4. User config (<config_dir>/gridclear/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    find_config_file, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{ClearConfig, Config, GridConfig, LogConfig, OutputConfig, OutputFormat};
