use crate::error::UsageError;
use crate::{Asserter, Fataler, Reflect};

impl<F: Fataler + ?Sized> Asserter<'_, F> {
    /// Fails unless `value` has `expected` elements.
    ///
    /// Arrays, slices, maps and sets report their element count, channels
    /// the number of buffered messages, strings their number of chars.
    ///
    /// # Panics
    ///
    /// Panics with [`UsageError::UnsupportedLength`] for any other kind of
    /// value.
    #[track_caller]
    pub fn len<T: Reflect + ?Sized>(&self, value: &T, expected: usize) {
        let value = value.reflect();
        let actual = match value.len() {
            Some(actual) => actual,
            None => UsageError::UnsupportedLength(value.kind()).raise(),
        };
        if actual != expected {
            self.fail(
                "assert_len",
                &format!("unexpected length\nexpected: {}\ngot: {}", expected, actual),
            );
        }
    }
}

/// Asserts that the given value has the expected length.
#[track_caller]
pub fn assert_len<F: Fataler + ?Sized, T: Reflect + ?Sized>(f: &F, value: &T, expected: usize) {
    Asserter::new(f).len(value, expected)
}
