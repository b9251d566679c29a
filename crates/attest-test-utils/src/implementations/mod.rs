//! Test implementations (fakes) of the failure sink.

pub mod recording_fataler;

pub use recording_fataler::RecordingFataler;
