//! The failure sink every check reports through.

use std::panic::Location;
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use crate::config::AssertConfig;

/// Receives assertion failures.
///
/// A real test binding stops the test (see [`PanicFataler`]); a recording
/// double just keeps the message. Checks call [`fatal`](Fataler::fatal) at
/// most once per invocation and do no further work afterwards, whether or not
/// it returns.
pub trait Fataler {
    /// Records a failure with a human-readable message.
    fn fatal(&self, message: &str);
}

/// Fails the running test by panicking with the reported message.
///
/// This is the binding for the standard test harness, where a panic marks the
/// test as failed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicFataler;

impl Fataler for PanicFataler {
    fn fatal(&self, message: &str) {
        panic!("{}", message);
    }
}

impl<F: Fataler + ?Sized> Fataler for &F {
    fn fatal(&self, message: &str) {
        (**self).fatal(message)
    }
}

impl<F: Fataler + ?Sized> Fataler for &mut F {
    fn fatal(&self, message: &str) {
        (**self).fatal(message)
    }
}

impl<F: Fataler + ?Sized> Fataler for Box<F> {
    fn fatal(&self, message: &str) {
        (**self).fatal(message)
    }
}

impl<F: Fataler + ?Sized> Fataler for Rc<F> {
    fn fatal(&self, message: &str) {
        (**self).fatal(message)
    }
}

impl<F: Fataler + ?Sized> Fataler for Arc<F> {
    fn fatal(&self, message: &str) {
        (**self).fatal(message)
    }
}

/// Hands a failure to the sink, prefixed with the caller's location when
/// configured to.
pub(crate) fn report<F: Fataler + ?Sized>(
    sink: &F,
    config: &AssertConfig,
    check: &'static str,
    location: &Location<'_>,
    message: &str,
) {
    tracing::debug!(
        check,
        file = location.file(),
        line = location.line(),
        "assertion failed"
    );

    if config.caller_location {
        sink.fatal(&format!("{}: {}", describe_location(location), message));
    } else {
        sink.fatal(message);
    }
}

/// Renders a location as `<file-basename>:<line>`.
pub fn describe_location(location: &Location<'_>) -> String {
    let file = Path::new(location.file())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(location.file());
    format!("{}:{}", file, location.line())
}
