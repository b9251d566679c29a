//! Testing utilities for the Attest assertion toolkit.
//!
//! This crate provides failure-sink doubles for verifying checks (a `mockall`
//! mock and a recording fake) and small fixture generators shared by the
//! test suites.

pub mod data_generators;
pub mod implementations;
pub mod mocks;

/// Re-export commonly used types for convenience
pub use mockall;

pub use data_generators::{buffered_channel, panics_on_negative, sample_error, Pair, SampleError};
pub use implementations::RecordingFataler;
pub use mocks::{create_mock_fataler, MockFataler};
