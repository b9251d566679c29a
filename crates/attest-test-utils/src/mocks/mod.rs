//! Mock implementations of the failure sink.

pub mod fataler;

pub use fataler::*;
