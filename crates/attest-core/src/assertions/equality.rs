use crate::value::deep_equal;
use crate::{Asserter, Fataler, Reflect};

impl<F: Fataler + ?Sized> Asserter<'_, F> {
    /// Fails unless `actual` and `expected` are deeply equal.
    ///
    /// See [`deep_equal`](crate::deep_equal) for the comparison rules.
    #[track_caller]
    pub fn equal<A, E>(&self, actual: &A, expected: &E)
    where
        A: Reflect + ?Sized,
        E: Reflect + ?Sized,
    {
        let actual = actual.reflect();
        let expected = expected.reflect();
        if !deep_equal(&actual, &expected) {
            self.fail(
                "assert_equal",
                &format!("unexpected value\nexpected: {}\ngot: {}", expected, actual),
            );
        }
    }

    /// Fails if `actual` and `expected` are deeply equal.
    #[track_caller]
    pub fn not_equal<A, E>(&self, actual: &A, expected: &E)
    where
        A: Reflect + ?Sized,
        E: Reflect + ?Sized,
    {
        if deep_equal(&actual.reflect(), &expected.reflect()) {
            self.fail("assert_not_equal", "unexpected different values, got the same");
        }
    }
}

/// Asserts that the actual value equals the expected value, comparing
/// sequences, maps, pointees and struct fields recursively.
#[track_caller]
pub fn assert_equal<F, A, E>(f: &F, actual: &A, expected: &E)
where
    F: Fataler + ?Sized,
    A: Reflect + ?Sized,
    E: Reflect + ?Sized,
{
    Asserter::new(f).equal(actual, expected)
}

/// Asserts that the actual value is not deeply equal to the expected value.
#[track_caller]
pub fn assert_not_equal<F, A, E>(f: &F, actual: &A, expected: &E)
where
    F: Fataler + ?Sized,
    A: Reflect + ?Sized,
    E: Reflect + ?Sized,
{
    Asserter::new(f).not_equal(actual, expected)
}
