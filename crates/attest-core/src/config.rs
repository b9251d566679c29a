use serde::{Deserialize, Serialize};

/// Controls how failures are presented to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssertConfig {
    /// Prefix each failure message with `<file>:<line>: ` of the failing check
    pub caller_location: bool,
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            caller_location: true,
        }
    }
}

impl AssertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caller_location(mut self, enabled: bool) -> Self {
        self.caller_location = enabled;
        self
    }
}
