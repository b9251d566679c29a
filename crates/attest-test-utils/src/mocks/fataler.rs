//! Mock implementation of the Fataler trait.

use attest_core::Fataler;
use mockall::mock;

// Generate the mock implementation
mock! {
    pub Fataler {}

    impl Fataler for Fataler {
        fn fatal(&self, message: &str);
    }
}

/// Creates a mock Fataler that accepts any number of failures.
pub fn create_mock_fataler() -> MockFataler {
    let mut mock = MockFataler::new();
    mock.expect_fatal().returning(|_| ());
    mock
}
