use std::fmt;
use std::panic::Location;

use crate::config::AssertConfig;
use crate::fataler::{report, Fataler};

/// A failure sink bundled with the configuration its checks run under.
///
/// Every free `assert_*` function is a shorthand for the matching method on an
/// `Asserter` built with [`AssertConfig::default`]. The asserter only borrows
/// the sink and keeps no state between checks.
pub struct Asserter<'a, F: Fataler + ?Sized> {
    sink: &'a F,
    config: AssertConfig,
}

impl<'a, F: Fataler + ?Sized> Asserter<'a, F> {
    pub fn new(sink: &'a F) -> Self {
        Self::with_config(sink, AssertConfig::default())
    }

    pub fn with_config(sink: &'a F, config: AssertConfig) -> Self {
        Self { sink, config }
    }

    pub fn config(&self) -> &AssertConfig {
        &self.config
    }

    /// Reports a failed check, attributing it to the outermost tracked caller.
    #[track_caller]
    pub(crate) fn fail(&self, check: &'static str, message: &str) {
        report(self.sink, &self.config, check, Location::caller(), message);
    }
}

impl<F: Fataler + ?Sized> fmt::Debug for Asserter<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asserter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
