use std::error::Error;
use std::fmt::Display;

use crate::error::compile_pattern;
use crate::{Asserter, Fataler, Identity};

/// An absent error, for the `expected` side of [`assert_err`].
pub const NO_ERROR: Option<&'static (dyn Error + 'static)> = None;

fn render<E: Display + ?Sized>(err: Option<&E>) -> String {
    err.map_or_else(|| "<nil>".to_string(), ToString::to_string)
}

fn message_of<E: Display + ?Sized>(err: Option<&E>) -> String {
    err.map(ToString::to_string).unwrap_or_default()
}

impl<F: Fataler + ?Sized> Asserter<'_, F> {
    /// Fails unless `actual` and `expected` are the same error instance.
    ///
    /// Errors are compared by [`Identity`], never by message alone, so an
    /// error wrapping another is not the same error as the one it wraps. Two
    /// absent errors are the same; an absent and a present one are not.
    #[track_caller]
    pub fn err<A, E>(&self, actual: Option<&A>, expected: Option<&E>)
    where
        A: Error + ?Sized,
        E: Error + ?Sized,
    {
        let same = match (actual, expected) {
            (None, None) => true,
            (Some(a), Some(e)) => Identity::of(a) == Identity::of(e),
            _ => false,
        };
        if !same {
            self.fail(
                "assert_err",
                &format!(
                    "unexpected error\nexpected: {}\ngot: {}",
                    render(expected),
                    render(actual)
                ),
            );
        }
    }

    /// Fails unless `err` is present and renders exactly as `msg`.
    #[track_caller]
    pub fn err_msg<E: Error + ?Sized>(&self, err: Option<&E>, msg: &str) {
        let matches = err.is_some_and(|err| err.to_string() == msg);
        if !matches {
            self.fail(
                "assert_err_msg",
                &format!(
                    "unexpected error message\nexpected: {}\ngot: {}",
                    msg,
                    message_of(err)
                ),
            );
        }
    }

    /// Fails unless `err` is present and its message contains a match for
    /// the regular expression `pattern`.
    ///
    /// # Panics
    ///
    /// Panics with a [`UsageError`](crate::UsageError) if `err` is present and
    /// `pattern` does not compile.
    #[track_caller]
    pub fn err_msg_matches<E: Error + ?Sized>(&self, err: Option<&E>, pattern: &str) {
        let actual = message_of(err);
        let matches = err.is_some() && compile_pattern(pattern).is_match(&actual);
        if !matches {
            self.fail(
                "assert_err_msg_matches",
                &format!(
                    "unexpected error pattern\nexpected: {}\ngot: {}",
                    pattern, actual
                ),
            );
        }
    }
}

/// Asserts that the actual error is the expected error instance.
#[track_caller]
pub fn assert_err<F, A, E>(f: &F, actual: Option<&A>, expected: Option<&E>)
where
    F: Fataler + ?Sized,
    A: Error + ?Sized,
    E: Error + ?Sized,
{
    Asserter::new(f).err(actual, expected)
}

/// Asserts that the message of the given error equals the given message.
#[track_caller]
pub fn assert_err_msg<F: Fataler + ?Sized, E: Error + ?Sized>(f: &F, err: Option<&E>, msg: &str) {
    Asserter::new(f).err_msg(err, msg)
}

/// Asserts that the message of the given error matches the given regular
/// expression.
#[track_caller]
pub fn assert_err_msg_matches<F: Fataler + ?Sized, E: Error + ?Sized>(
    f: &F,
    err: Option<&E>,
    pattern: &str,
) {
    Asserter::new(f).err_msg_matches(err, pattern)
}
