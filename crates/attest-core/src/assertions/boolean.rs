use crate::{Asserter, Fataler};

impl<F: Fataler + ?Sized> Asserter<'_, F> {
    /// Fails unless `condition` holds.
    #[track_caller]
    pub fn is_true(&self, condition: bool) {
        if !condition {
            self.fail("assert_true", "expected true, got false");
        }
    }

    /// Fails if `condition` holds.
    #[track_caller]
    pub fn is_false(&self, condition: bool) {
        if condition {
            self.fail("assert_false", "expected false, got true");
        }
    }
}

/// Asserts that the given condition is fulfilled.
#[track_caller]
pub fn assert_true<F: Fataler + ?Sized>(f: &F, condition: bool) {
    Asserter::new(f).is_true(condition)
}

/// Asserts that the given condition is not fulfilled.
#[track_caller]
pub fn assert_false<F: Fataler + ?Sized>(f: &F, condition: bool) {
    Asserter::new(f).is_false(condition)
}
