use paindiary_core::{EntryValidationError, PainEntry};

#[test]
fn new_accepts_full_scale() {
    for level in [0.0, 0.5, 5.0, 10.0] {
        let entry = PainEntry::new(1_700_000_000_000, level).unwrap();
        assert_eq!(entry.level, level);
        assert_eq!(entry.timestamp_ms, 1_700_000_000_000);
    }
}

#[test]
fn new_rejects_levels_outside_scale() {
    assert_eq!(
        PainEntry::new(0, -0.1).unwrap_err(),
        EntryValidationError::LevelOutOfRange { level: -0.1 }
    );
    assert_eq!(
        PainEntry::new(0, 10.1).unwrap_err(),
        EntryValidationError::LevelOutOfRange { level: 10.1 }
    );
    assert_eq!(
        PainEntry::new(0, f64::INFINITY).unwrap_err(),
        EntryValidationError::NonFiniteLevel
    );
}

#[test]
fn now_stamps_current_instant() {
    let before = chrono::Utc::now().timestamp_millis();
    let entry = PainEntry::now(3.0).unwrap();
    let after = chrono::Utc::now().timestamp_millis();

    assert!(entry.timestamp_ms >= before && entry.timestamp_ms <= after);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let entry = PainEntry::new(1_700_000_000_000, 6.5).unwrap();

    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["timestamp_ms"], 1_700_000_000_000_i64);
    assert_eq!(json["level"], 6.5);

    let decoded: PainEntry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn deserialize_rejects_out_of_range_level() {
    let value = serde_json::json!({ "timestamp_ms": 1, "level": 11.0 });

    let err = serde_json::from_value::<PainEntry>(value).unwrap_err();
    assert!(
        err.to_string().contains("outside [0, 10]"),
        "unexpected error: {err}"
    );
}
