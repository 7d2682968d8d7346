//! Result Sender Port
//!
//! Sink for per-region outcomes. The caller's execution framework decides
//! where they go (terminal, NDJSON stream, test buffer).

use crate::domain::value_objects::ClearOutcome;

/// Receives one outcome per processed region, in processing order
pub trait ResultSender {
    fn send_result(&self, outcome: &ClearOutcome);
}

impl<S: ResultSender + ?Sized> ResultSender for &S {
    fn send_result(&self, outcome: &ClearOutcome) {
        (**self).send_result(outcome)
    }
}

impl<S: ResultSender + ?Sized> ResultSender for Box<S> {
    fn send_result(&self, outcome: &ClearOutcome) {
        (**self).send_result(outcome)
    }
}
