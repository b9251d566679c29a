//! # Attest
//!
//! A small assertion toolkit for test suites. Checks compare operands and
//! report failures through a [`Fataler`], a single-method failure sink,
//! instead of aborting on their own. The sink decides what a failure means:
//! [`PanicFataler`] fails the running test, a recording double lets a suite
//! verify the checks themselves.
//!
//! Operands are inspected through [`Reflect`], which gives every value a type
//! identity and sorts it into a closed set of categories. On top of that model
//! sit the two rules most checks depend on:
//!
//! * deep, type-sensitive equality ([`deep_equal`]), and
//! * nil detection that treats unset pointers, slices, maps, funcs, channels
//!   and error objects as absent while zero-valued plain values are not.
//!
//! ## Example
//!
//! ```
//! use attest_core::{assert_equal, assert_len, assert_panics, reflect_struct, PanicFataler};
//!
//! struct Pair {
//!     field1: i32,
//!     field2: String,
//! }
//!
//! reflect_struct!(Pair { field1, field2 });
//!
//! fn panics_on_negative(i: i32) -> i32 {
//!     assert!(i >= 0);
//!     i
//! }
//!
//! let t = PanicFataler;
//! let seven = Pair { field1: 7, field2: "seven".to_string() };
//!
//! assert_equal(&t, &seven, &Pair { field1: 7, field2: "seven".to_string() });
//! assert_len(&t, "foobar", 6);
//! assert_panics(&t, panics_on_negative, (-1,));
//! ```
//!
//! Failures carry the `<file>:<line>: ` of the failing check unless
//! [`AssertConfig::caller_location`] is turned off on an [`Asserter`].
//! Passing an argument a check cannot work with (an unlengthed value to
//! [`assert_len`], a malformed pattern) is a [`UsageError`] and panics rather
//! than reaching the sink.

mod asserter;
mod callable;
mod config;
mod error;
mod fataler;

pub mod assertions;
pub mod value;

pub use asserter::Asserter;
pub use assertions::*;
pub use callable::Callable;
pub use config::AssertConfig;
pub use error::UsageError;
pub use fataler::{describe_location, Fataler, PanicFataler};
pub use value::{deep_equal, Identity, Kind, Nil, Reflect, Value, ValueKind};
