//! Text Result Sender

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::ResultSender;
use crate::domain::value_objects::ClearOutcome;

/// Result sender that writes each outcome's message on its own line
pub struct TextResultSender {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl TextResultSender {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl ResultSender for TextResultSender {
    fn send_result(&self, outcome: &ClearOutcome) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", outcome);
            let _ = writer.flush();
        }
    }
}
