use attest_core::{
    assert_len, assert_panics, assert_panics_with, recover_panic, AssertConfig, Asserter, Kind,
    Reflect, UsageError,
};
use attest_test_utils::{buffered_channel, panics_on_negative, Pair, RecordingFataler};
use attest_tests::init_tracing;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn test_panics_scenarios() {
    init_tracing();
    let f = RecordingFataler::new();

    assert_panics(&f, panics_on_negative, (-1,));
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());

    assert_panics(&f, panics_on_negative, (1,));
    assert_eq!(f.last_message_body().as_deref(), Some("expected a panic, got none"));
}

#[test]
fn test_panic_never_escapes_the_check() {
    let f = RecordingFataler::new();
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        assert_panics(&f, |_: Pair| panic!("boom"), (Pair::default(),));
        assert_panics(&f, || Vec::<u8>::new()[3], ());
    }));
    assert!(outcome.is_ok(), "the panic leaked out of assert_panics");
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());
}

#[test]
fn test_panics_with_message() {
    let f = RecordingFataler::new();
    assert_panics_with(&f, panics_on_negative, (-5,), r"negative input: -5$");
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());

    assert_eq!(
        recover_panic(panics_on_negative, (-2,)).as_deref(),
        Some("negative input: -2")
    );
}

#[test]
fn test_len_scenarios() {
    let f = RecordingFataler::new();

    assert_len(&f, &["a", "b", "c"], 3);
    assert_len(&f, &None::<HashMap<String, i32>>, 0);
    assert_len(&f, &HashMap::<String, i32>::new(), 0);
    assert_len(&f, &HashMap::from([("one", 1), ("two", 2)]), 2);
    assert_len(&f, "foobar", 6);

    let (_tx, rx) = buffered_channel(3, 2);
    assert_len(&f, &rx, 2);
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());
}

#[test]
fn test_len_mismatch_reports_once() {
    let f = RecordingFataler::new();
    let check = Asserter::with_config(&f, AssertConfig::default().with_caller_location(false));

    check.len(&vec![1, 2, 3], 4);
    assert_eq!(f.messages(), vec!["unexpected length\nexpected: 4\ngot: 3".to_string()]);
}

#[test]
fn test_len_of_unsupported_value_is_usage_error() {
    let f = RecordingFataler::new();

    let values: [Box<dyn Reflect>; 3] = [
        Box::new(Pair::default()),
        Box::new(7_i32),
        Box::new(Some(1.5_f64)),
    ];
    for value in &values {
        let outcome = catch_unwind(AssertUnwindSafe(|| assert_len(&f, &**value, 1)));
        let payload = outcome.expect_err("usage errors must propagate");
        let message = payload.downcast_ref::<String>().cloned().unwrap_or_default();
        assert!(message.starts_with("cannot take the length"), "got {}", message);
    }
    assert!(!f.fataled(), "usage errors never reach the sink");
    assert_eq!(
        UsageError::UnsupportedLength(Kind::Struct).error_code(),
        "ERR_ATTEST_UNSUPPORTED_LENGTH"
    );
}
