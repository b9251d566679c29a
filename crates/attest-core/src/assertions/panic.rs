use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::compile_pattern;
use crate::{Asserter, Callable, Fataler};

/// Extracts the message from a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Invokes `callable` with `args`, containing any panic it raises.
///
/// Returns the panic message, or `None` if the call returned normally. The
/// call's own return value is dropped inside the protected region.
///
/// Containing a panic does not silence it: the process-wide panic hook still
/// runs first, so the default hook prints the message to stderr. The hook is
/// left alone because it is shared by every thread of the test binary. Suites
/// that want quiet output can install their own hook with
/// [`std::panic::set_hook`] before running.
pub fn recover_panic<C, Args>(callable: C, args: Args) -> Option<String>
where
    C: Callable<Args>,
{
    let outcome = catch_unwind(AssertUnwindSafe(move || {
        drop(callable.call_with(args));
    }));

    match outcome {
        Ok(()) => None,
        Err(payload) => {
            let message = panic_message(&*payload);
            tracing::trace!(%message, "recovered panic");
            Some(message)
        }
    }
}

impl<F: Fataler + ?Sized> Asserter<'_, F> {
    /// Fails unless calling `callable` with `args` panics.
    ///
    /// The panic is contained and never reaches the caller.
    #[track_caller]
    pub fn panics<C, Args>(&self, callable: C, args: Args)
    where
        C: Callable<Args>,
    {
        if recover_panic(callable, args).is_none() {
            self.fail("assert_panics", "expected a panic, got none");
        }
    }

    /// Fails unless calling `callable` with `args` panics with a message
    /// matching `pattern`.
    ///
    /// # Panics
    ///
    /// Panics with a [`UsageError`](crate::UsageError) before invoking
    /// `callable` if `pattern` does not compile.
    #[track_caller]
    pub fn panics_with<C, Args>(&self, callable: C, args: Args, pattern: &str)
    where
        C: Callable<Args>,
    {
        let rx = compile_pattern(pattern);
        match recover_panic(callable, args) {
            None => self.fail("assert_panics_with", "expected a panic, got none"),
            Some(message) if !rx.is_match(&message) => self.fail(
                "assert_panics_with",
                &format!(
                    "unexpected panic message\nexpected: {}\ngot: {}",
                    pattern, message
                ),
            ),
            Some(_) => {}
        }
    }
}

/// Asserts that calling `callable` with the argument tuple `args` panics.
#[track_caller]
pub fn assert_panics<F, C, Args>(f: &F, callable: C, args: Args)
where
    F: Fataler + ?Sized,
    C: Callable<Args>,
{
    Asserter::new(f).panics(callable, args)
}

/// Asserts that calling `callable` with the argument tuple `args` panics with
/// a message matching the regular expression `pattern`.
#[track_caller]
pub fn assert_panics_with<F, C, Args>(f: &F, callable: C, args: Args, pattern: &str)
where
    F: Fataler + ?Sized,
    C: Callable<Args>,
{
    Asserter::new(f).panics_with(callable, args, pattern)
}
