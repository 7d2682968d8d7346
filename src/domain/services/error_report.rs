//! Failure Reporting
//!
//! Turns a grid error into the short message users see. The full source
//! chain only goes to the debug log.

use std::error::Error;

use tracing::{debug, error};

use crate::domain::ports::ResultSender;
use crate::domain::value_objects::ClearOutcome;

const UNKNOWN_ERROR: &str = "unknown error";

/// First line of the top-level message, without the source chain
pub fn strip_error(err: &(dyn Error + 'static)) -> String {
    let message = err.to_string();
    let first = message.lines().map(str::trim).find(|l| !l.is_empty());
    first.unwrap_or(UNKNOWN_ERROR).to_string()
}

/// Log `err`, send a stripped `Failed` outcome for `subject` and return it
pub fn report_failure<S>(sender: &S, subject: &str, err: &(dyn Error + 'static)) -> ClearOutcome
where
    S: ResultSender + ?Sized,
{
    let mut chain = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    if !chain.is_empty() {
        debug!(region = subject, causes = ?chain, "failure detail");
    }

    let message = strip_error(err);
    error!(region = subject, "{}", message);

    let outcome = ClearOutcome::Failed {
        region: subject.to_string(),
        message,
    };
    sender.send_result(&outcome);
    outcome
}
