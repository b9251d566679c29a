use crate::{Asserter, Fataler, Reflect};

impl<F: Fataler + ?Sized> Asserter<'_, F> {
    /// Fails unless `value` is nil.
    ///
    /// Only the untyped [`Nil`](crate::Nil) and unset pointers, options,
    /// funcs, channels, slices, maps and error objects count as nil. A
    /// zero-valued number, string or struct is a value.
    #[track_caller]
    pub fn nil<T: Reflect + ?Sized>(&self, value: &T) {
        let value = value.reflect();
        if !value.is_nil() {
            self.fail("assert_nil", &format!("expected nil, got {}", value));
        }
    }

    /// Fails if `value` is nil.
    #[track_caller]
    pub fn not_nil<T: Reflect + ?Sized>(&self, value: &T) {
        if value.reflect().is_nil() {
            self.fail("assert_not_nil", "expected a value, got nil");
        }
    }
}

/// Asserts that the given value is nil.
#[track_caller]
pub fn assert_nil<F: Fataler + ?Sized, T: Reflect + ?Sized>(f: &F, value: &T) {
    Asserter::new(f).nil(value)
}

/// Asserts that the given value is not nil.
#[track_caller]
pub fn assert_not_nil<F: Fataler + ?Sized, T: Reflect + ?Sized>(f: &F, value: &T) {
    Asserter::new(f).not_nil(value)
}
