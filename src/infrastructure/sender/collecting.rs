//! Collecting Result Sender
//!
//! Keeps outcomes in memory so embedding callers (and tests) can inspect
//! them after a run.

use std::sync::Mutex;

use crate::domain::ports::ResultSender;
use crate::domain::value_objects::ClearOutcome;

#[derive(Debug, Default)]
pub struct CollectingResultSender {
    outcomes: Mutex<Vec<ClearOutcome>>,
}

impl CollectingResultSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes received so far, in arrival order
    pub fn outcomes(&self) -> Vec<ClearOutcome> {
        self.outcomes
            .lock()
            .map(|o| o.clone())
            .unwrap_or_default()
    }

    /// Outcome messages, as a text sender would print them
    pub fn messages(&self) -> Vec<String> {
        self.outcomes().iter().map(ToString::to_string).collect()
    }
}

impl ResultSender for CollectingResultSender {
    fn send_result(&self, outcome: &ClearOutcome) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push(outcome.clone());
        }
    }
}
