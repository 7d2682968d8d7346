//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GridClearError, GridClearResult};

use super::types::Config;

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "gridclear.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> GridClearResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| GridClearError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| GridClearError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file to use.
///
/// An explicit path wins; otherwise `gridclear.toml` in `cwd`, then the user
/// config at `<config_dir>/gridclear/config.toml`.
pub fn find_config_file(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project_config = cwd.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        return Some(project_config);
    }

    let user_config = dirs::config_dir()?.join("gridclear/config.toml");
    user_config.exists().then_some(user_config)
}

/// Load from an explicit path, project config, user config, or defaults.
///
/// Any config file that is found but cannot be read or parsed is an error.
/// Environment overrides are applied on top.
pub fn load_or_default(
    explicit: Option<&Path>,
    cwd: &Path,
) -> GridClearResult<(Config, Vec<ConfigWarning>)> {
    let (config, mut warnings) = match find_config_file(explicit, cwd) {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    let config = with_env_overrides(config, |name| std::env::var(name).ok(), &mut warnings);
    Ok((config, warnings))
}

/// Apply environment variable overrides (GRIDCLEAR_* prefix)
pub fn with_env_overrides<F>(
    mut config: Config,
    lookup: F,
    warnings: &mut Vec<ConfigWarning>,
) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // GRIDCLEAR_SNAPSHOT
    if let Some(snapshot) = lookup("GRIDCLEAR_SNAPSHOT").filter(|s| !s.is_empty()) {
        config.grid.snapshot = PathBuf::from(snapshot);
    }

    // GRIDCLEAR_BATCH_SIZE
    if let Some(value) = lookup("GRIDCLEAR_BATCH_SIZE") {
        match value.trim().parse::<usize>() {
            Ok(size) if size > 0 => config.clear.batch_size = size,
            _ => warnings.push(ConfigWarning {
                key: "GRIDCLEAR_BATCH_SIZE".to_string(),
                file: PathBuf::from("<env>"),
                line: None,
                suggestion: Some("a positive integer".to_string()),
            }),
        }
    }

    // GRIDCLEAR_LOG
    if let Some(level) = lookup("GRIDCLEAR_LOG").filter(|s| !s.is_empty()) {
        config.log.level = level;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "grid",
        "snapshot",
        "clear",
        "batch_size",
        "output",
        "format",
        "log",
        "level",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
