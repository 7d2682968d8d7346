//! Output Rendering
//!
//! Renders `list` results. Clear outcomes are streamed by the result
//! senders instead.

use serde_json::json;

use crate::application::{ListResult, RegionDescription};
use crate::config::OutputFormat;

/// Render a list result as text lines or NDJSON
pub fn render_list(result: &ListResult, format: OutputFormat) -> String {
    let lines: Vec<String> = match format {
        OutputFormat::Text => result
            .errors
            .iter()
            .map(|e| format!("error: {}", e))
            .chain(result.regions.iter().map(describe_text))
            .collect(),
        OutputFormat::Json => result
            .errors
            .iter()
            .map(|e| json!({"event": "pattern_failed", "command": "list", "error": e}))
            .chain(result.regions.iter().map(describe_json))
            .map(|v| v.to_string())
            .collect(),
    };

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn describe_text(region: &RegionDescription) -> String {
    if let Some(error) = &region.error {
        return format!("{}: error: {}", region.name, error);
    }
    if !region.exists {
        return format!("{}: does not exist", region.name);
    }

    let constraint = region
        .key_constraint
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "none".to_string());
    let strategy = region
        .strategy
        .map(|s| s.to_string())
        .unwrap_or_default();

    format!(
        "{}: path={} keys={} entries={} strategy={}",
        region.name,
        region.full_path.as_deref().unwrap_or(""),
        constraint,
        region.entry_count.unwrap_or(0),
        strategy
    )
}

fn describe_json(region: &RegionDescription) -> serde_json::Value {
    json!({
        "event": "region",
        "command": "list",
        "region": region.name,
        "exists": region.exists,
        "full_path": region.full_path,
        "key_constraint": region.key_constraint.as_ref().map(|c| c.to_string()),
        "entries": region.entry_count,
        "strategy": region.strategy.map(|s| s.to_string()),
        "error": region.error,
    })
}
