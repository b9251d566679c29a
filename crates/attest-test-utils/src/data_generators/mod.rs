//! Fixture values shared by the assertion test suites.

use attest_core::reflect_struct;
use thiserror::Error;
use tokio::sync::mpsc;

/// A plain two-field struct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pair {
    pub field1: i32,
    pub field2: String,
}

reflect_struct!(Pair { field1, field2 });

impl Pair {
    pub fn new(field1: i32, field2: &str) -> Self {
        Self {
            field1,
            field2: field2.to_string(),
        }
    }
}

/// Error type for fixture errors
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SampleError {
    message: String,
}

/// Creates a fresh error instance rendering as `message`.
pub fn sample_error(message: &str) -> SampleError {
    SampleError {
        message: message.to_string(),
    }
}

/// Panics for negative input, returns it unchanged otherwise.
pub fn panics_on_negative(i: i32) -> i32 {
    if i < 0 {
        panic!("negative input: {}", i);
    }
    i
}

/// Creates a bounded channel of `capacity` holding `pending` queued messages.
///
/// # Panics
///
/// Panics if `pending` exceeds `capacity`.
pub fn buffered_channel(capacity: usize, pending: usize) -> (mpsc::Sender<usize>, mpsc::Receiver<usize>) {
    assert!(pending <= capacity, "cannot queue {} messages in {}", pending, capacity);
    let (tx, rx) = mpsc::channel(capacity);
    for i in 0..pending {
        if tx.try_send(i).is_err() {
            unreachable!("channel has room for {} messages", capacity);
        }
    }
    (tx, rx)
}
