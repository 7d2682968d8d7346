//! JSON Result Sender
//!
//! Outputs clear outcomes as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::ResultSender;
use crate::domain::value_objects::ClearOutcome;

/// Result sender that writes one JSON object per outcome
pub struct JsonResultSender {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonResultSender {
    /// Create a JSON sender writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON sender writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON representation of an outcome
pub fn outcome_to_json(outcome: &ClearOutcome) -> serde_json::Value {
    match outcome {
        ClearOutcome::Removed { region, count } => serde_json::json!({
            "event": "region_cleared",
            "command": "clear",
            "region": region,
            "count": count,
        }),

        ClearOutcome::WouldRemove { region, count } => serde_json::json!({
            "event": "region_preview",
            "command": "clear",
            "region": region,
            "count": count,
        }),

        ClearOutcome::NotFound { region } => serde_json::json!({
            "event": "region_not_found",
            "command": "clear",
            "region": region,
            "message": outcome.to_string(),
        }),

        ClearOutcome::Failed { region, message } => serde_json::json!({
            "event": "region_failed",
            "command": "clear",
            "region": region,
            "error": message,
        }),
    }
}

impl ResultSender for JsonResultSender {
    fn send_result(&self, outcome: &ClearOutcome) {
        self.write_event(outcome_to_json(outcome));
    }
}
