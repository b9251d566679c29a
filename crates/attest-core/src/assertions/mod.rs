//! The check functions.
//!
//! Each check comes in two forms: a free `assert_*` function taking the sink
//! directly, and a method on [`Asserter`](crate::Asserter) for callers that
//! need a non-default [`AssertConfig`](crate::AssertConfig).

mod boolean;
mod equality;
mod error;
mod length;
mod nil;
mod panic;

// Re-export all checks for easy access
pub use boolean::*;
pub use equality::*;
pub use error::*;
pub use length::*;
pub use nil::*;
pub use panic::*;
