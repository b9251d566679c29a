use attest_core::{assert_err, assert_err_msg, assert_err_msg_matches, NO_ERROR};
use attest_test_utils::{sample_error, RecordingFataler, SampleError};
use attest_tests::init_tracing;
use std::error::Error;

#[test]
fn test_err_is_identity() {
    init_tracing();
    let f = RecordingFataler::new();
    let e = sample_error("error one");

    assert_err(&f, Some(&e), Some(&e));
    assert_err(&f, NO_ERROR, NO_ERROR);
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());

    let twin = sample_error("error one");
    assert_err(&f, Some(&e), Some(&twin));
    assert!(f.fataled(), "distinct instances differ even with equal messages");
}

#[test]
fn test_err_absent_vs_present() {
    let f = RecordingFataler::new();
    let e = sample_error("error one");

    assert_err(&f, None::<&SampleError>, Some(&e));
    assert_eq!(
        f.last_message_body().as_deref(),
        Some("unexpected error\nexpected: error one\ngot: <nil>")
    );

    assert_err(&f, Some(&e), NO_ERROR);
    assert_eq!(
        f.last_message_body().as_deref(),
        Some("unexpected error\nexpected: <nil>\ngot: error one")
    );
}

#[derive(Debug, thiserror::Error)]
#[error("context: {source}")]
struct WithContext {
    source: SampleError,
}

#[test]
fn test_err_wrapper_is_a_different_error() {
    let f = RecordingFataler::new();
    let wrapped = WithContext {
        source: sample_error("root cause"),
    };

    assert_err(&f, Some(&wrapped), Some(&wrapped.source));
    assert_eq!(
        f.last_message_body().as_deref(),
        Some("unexpected error\nexpected: root cause\ngot: context: root cause")
    );

    f.reset();
    assert_err(&f, Some(&wrapped.source), Some(&wrapped.source));
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());
}

#[test]
fn test_err_across_trait_objects() {
    let f = RecordingFataler::new();
    let e = sample_error("boxed");
    let as_dyn: &(dyn Error + 'static) = &e;

    assert_err(&f, Some(&e), Some(as_dyn));
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());
}

#[test]
fn test_err_msg() {
    let f = RecordingFataler::new();
    let e = sample_error("error message one");

    assert_err_msg(&f, Some(&e), "error message one");
    assert!(!f.fataled());

    assert_err_msg(&f, Some(&e), "wrong error message");
    assert_eq!(
        f.last_message_body().as_deref(),
        Some("unexpected error message\nexpected: wrong error message\ngot: error message one")
    );

    f.reset();
    assert_err_msg(&f, NO_ERROR, "");
    assert!(f.fataled(), "absent errors never pass");
}

#[test]
fn test_err_msg_matches_scenarios() {
    let f = RecordingFataler::new();
    let e = sample_error("an error message with a 74 in it");

    assert_err_msg_matches(&f, Some(&e), r"a \d{2} in it");
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());

    assert_err_msg_matches(&f, Some(&e), r"a \d{3} in it");
    assert_eq!(
        f.last_message_body().as_deref(),
        Some("unexpected error pattern\nexpected: a \\d{3} in it\ngot: an error message with a 74 in it")
    );

    f.reset();
    assert_err_msg_matches(&f, NO_ERROR, ".*");
    assert!(f.fataled(), "absent errors never pass");
}

#[test]
fn test_results_feed_error_checks() {
    let f = RecordingFataler::new();
    let result: Result<(), Box<dyn Error + Send + Sync>> = Err(sample_error("from result").into());
    let err = result.as_ref().err().map(|e| &**e);

    assert_err_msg(&f, err, "from result");
    assert_err_msg_matches(&f, err, "^from");
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());
}
