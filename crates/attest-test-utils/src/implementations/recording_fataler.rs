//! A failure sink that records every reported message.

use attest_core::Fataler;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Thread-safe recording sink for verifying checks.
///
/// Clones share the same record, so a clone can be handed to the code under
/// test while the original is inspected.
#[derive(Clone, Default)]
pub struct RecordingFataler {
    messages: Arc<Mutex<Vec<String>>>,
}

impl fmt::Debug for RecordingFataler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingFataler")
            .field("failures", &self.messages.lock().len())
            .finish()
    }
}

impl RecordingFataler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any failure has been reported since the last reset.
    pub fn fataled(&self) -> bool {
        !self.messages.lock().is_empty()
    }

    /// Number of failures reported since the last reset.
    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }

    /// The most recent failure message, if any.
    pub fn last_message(&self) -> Option<String> {
        self.messages.lock().last().cloned()
    }

    /// The most recent failure message with its `<file>:<line>: ` prefix
    /// removed.
    pub fn last_message_body(&self) -> Option<String> {
        self.last_message().map(|message| strip_location(&message).to_string())
    }

    /// All failure messages in the order they were reported.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    /// Forgets all recorded failures.
    pub fn reset(&self) {
        self.messages.lock().clear();
    }
}

impl Fataler for RecordingFataler {
    fn fatal(&self, message: &str) {
        tracing::trace!(message, "recording failure");
        self.messages.lock().push(message.to_string());
    }
}

/// Removes a leading `<file>.rs:<line>: ` prefix, if present.
pub fn strip_location(message: &str) -> &str {
    let Some((head, rest)) = message.split_once(": ") else {
        return message;
    };
    match head.rsplit_once(':') {
        Some((file, line)) if file.ends_with(".rs") && line.parse::<u32>().is_ok() => rest,
        _ => message,
    }
}
