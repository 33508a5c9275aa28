use assert_range::{FieldRecord, RangeFailure};
use proptest::option;
use proptest::prelude::*;

#[test]
fn test_record_round_trip_preserves_fields() {
    let failure = RangeFailure::out_of_range(5, 1, 10);

    let mut record = FieldRecord::new();
    failure.store(Some(&mut record)).unwrap();
    let rebuilt = RangeFailure::restore(&record).unwrap();

    assert_eq!(rebuilt.actual(), Some("5"));
    assert_eq!(rebuilt.low(), Some("1"));
    assert_eq!(rebuilt.high(), Some("10"));
    assert_eq!(rebuilt.title(), failure.title());
    assert_eq!(rebuilt, failure);
}

#[test]
fn test_record_round_trip_preserves_absence() {
    let failure = RangeFailure::new(None::<i32>, Some(1), None::<i32>);

    let mut record = FieldRecord::new();
    failure.store(Some(&mut record)).unwrap();
    let rebuilt = RangeFailure::restore(&record).unwrap();

    // Absence comes back as absence, not as "null" or "".
    assert_eq!(rebuilt.actual(), None);
    assert_eq!(rebuilt.low(), Some("1"));
    assert_eq!(rebuilt.high(), None);
}

#[test]
fn test_construction_captures_absence_not_text() {
    let failure = RangeFailure::new(None::<i32>, None::<i32>, None::<i32>);

    assert_eq!(failure.actual(), None);
    assert_eq!(failure.low(), None);
    assert_eq!(failure.high(), None);
    assert_ne!(failure.actual(), Some("null"));
}

#[test]
fn test_json_round_trip() {
    let failure = RangeFailure::out_of_range(5, 1, 10);

    let json = serde_json::to_string(&failure).unwrap();
    let rebuilt: RangeFailure = serde_json::from_str(&json).unwrap();

    assert_eq!(rebuilt, failure);
}

#[test]
fn test_json_field_names() {
    let failure = RangeFailure::new(Some(5), Some(1), None::<i32>);

    let value = serde_json::to_value(&failure).unwrap();

    assert_eq!(value["Actual"], "5");
    assert_eq!(value["Low"], "1");
    assert_eq!(value["High"], serde_json::Value::Null);
    assert_eq!(value["Title"], "Assert.InRange() Failure");
}

#[test]
fn test_json_round_trip_of_record() {
    let failure = RangeFailure::new(None::<i32>, Some("low"), Some("high"));
    let mut record = FieldRecord::new();
    failure.store(Some(&mut record)).unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let carried: FieldRecord = serde_json::from_str(&json).unwrap();
    let rebuilt = RangeFailure::restore(&carried).unwrap();

    assert_eq!(rebuilt, failure);
}

proptest! {
    #[test]
    fn round_trip_is_identity(
        actual in option::of(".*"),
        low in option::of(".*"),
        high in option::of(".*"),
    ) {
        let failure = RangeFailure::from_parts(actual, low, high);

        let mut record = FieldRecord::new();
        failure.store(Some(&mut record)).unwrap();
        let rebuilt = RangeFailure::restore(&record).unwrap();

        prop_assert_eq!(rebuilt, failure);
    }

    #[test]
    fn json_round_trip_is_identity(
        actual in option::of(".*"),
        low in option::of(".*"),
        high in option::of(".*"),
    ) {
        let failure = RangeFailure::from_parts(actual, low, high);

        let json = serde_json::to_string(&failure).unwrap();
        let rebuilt: RangeFailure = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(rebuilt, failure);
    }
}
