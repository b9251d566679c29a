use attest_core::{
    assert_equal, assert_not_equal, deep_equal, AssertConfig, Asserter, Nil, Reflect,
};
use attest_test_utils::{create_mock_fataler, MockFataler, Pair, RecordingFataler};
use attest_tests::init_tracing;
use pretty_assertions::assert_eq;
use std::collections::{BTreeSet, HashMap, HashSet};

#[test]
fn test_struct_scenarios() {
    init_tracing();
    let f = RecordingFataler::new();

    assert_equal(&f, &Pair::new(7, "seven"), &Pair::new(7, "seven"));
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());

    assert_equal(&f, &Pair::new(7, "seven"), &Pair::new(7, "Seven"));
    assert!(f.fataled(), "expected error, got none");
    assert_eq!(
        f.last_message_body().as_deref(),
        Some("unexpected value\nexpected: {field1:7 field2:Seven}\ngot: {field1:7 field2:seven}")
    );
}

#[test]
fn test_numeric_types_are_never_coerced() {
    let f = RecordingFataler::new();

    assert_equal(&f, &1_i32, &1.0_f64);
    assert!(f.fataled());

    f.reset();
    assert_not_equal(&f, &1_u64, &1_i64);
    assert!(!f.fataled());
}

type Case = (Box<dyn Reflect>, Box<dyn Reflect>);

fn case(actual: impl Reflect + 'static, expected: impl Reflect + 'static) -> Case {
    (Box::new(actual), Box::new(expected))
}

#[test]
fn test_equal_and_not_equal_are_complementary() {
    let values = [
        case(7, 7),
        case(7, 13),
        case("seven", String::from("seven")),
        case(vec![1, 2], vec![1, 2]),
        case(None::<Vec<i32>>, Vec::<i32>::new()),
        case(Box::new(Pair::new(1, "a")), Nil),
    ];

    for (actual, expected) in &values {
        let f = RecordingFataler::new();
        assert_equal(&f, &**actual, &**expected);
        assert_not_equal(&f, &**actual, &**expected);
        assert_eq!(f.count(), 1, "{} vs {}", actual.reflect(), expected.reflect());
    }
}

#[test]
fn test_collections_compare_by_content() {
    let f = RecordingFataler::new();

    let a: HashSet<i32> = [1, 2, 3].into_iter().collect();
    let b: HashSet<i32> = [3, 2, 1].into_iter().collect();
    assert_equal(&f, &a, &b);

    let mut m1 = HashMap::new();
    m1.insert("k", Some(Box::new(Pair::new(1, "one"))));
    m1.insert("nil", None);
    let m2 = m1.clone();
    assert_equal(&f, &m1, &m2);
    assert!(!f.fataled(), "unexpected error: {:?}", f.last_message());

    let c: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
    assert_equal(&f, &a, &c);
    assert!(f.fataled(), "different set types differ");
}

#[test]
fn test_reflexive_over_nested_shapes() {
    let nested = (
        vec![Some(Box::new(Pair::new(1, "x"))), None],
        [1.5_f32, 2.5],
        'c',
        std::rc::Rc::new(HashMap::from([(1_u8, vec!["a"])])),
    );
    assert!(deep_equal(&nested.reflect(), &nested.reflect()));
}

#[test]
fn test_mock_sees_single_failure() {
    let mut mock = MockFataler::new();
    mock.expect_fatal()
        .withf(|message: &str| message == "unexpected different values, got the same")
        .times(1)
        .returning(|_| ());

    let check = Asserter::with_config(&mock, AssertConfig::default().with_caller_location(false));
    check.not_equal(&Pair::new(1, "a"), &Pair::new(1, "a"));
    check.not_equal(&Pair::new(1, "a"), &Pair::new(2, "a"));
}

#[test]
fn test_default_mock_tolerates_failures() {
    let mock = create_mock_fataler();
    assert_equal(&mock, &1, &2);
}
