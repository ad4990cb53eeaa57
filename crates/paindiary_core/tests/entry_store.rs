use paindiary_core::db::open_db_in_memory;
use paindiary_core::{
    EntryRepository, EntryValidationError, PainEntry, RepoError, SqliteEntryRepository,
};

#[test]
fn add_then_get_all_contains_new_and_previous_entries() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let first = PainEntry::new(1_000, 2.0).unwrap();
    let second = PainEntry::new(2_000, 7.5).unwrap();
    repo.add(&first).unwrap();
    repo.add(&second).unwrap();

    let all = repo.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&first));
    assert!(all.contains(&second));
}

#[test]
fn add_replaces_entry_with_same_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    repo.add(&PainEntry::new(5_000, 3.0).unwrap()).unwrap();
    repo.add(&PainEntry::new(5_000, 9.0).unwrap()).unwrap();

    let all = repo.get_all().unwrap();
    assert_eq!(all, vec![PainEntry::new(5_000, 9.0).unwrap()]);
}

#[test]
fn add_rejects_out_of_range_level_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    repo.add(&PainEntry::new(1_000, 4.0).unwrap()).unwrap();

    // Bypass the constructor to reach the repository write-path check.
    let invalid = PainEntry {
        timestamp_ms: 2_000,
        level: 10.1,
    };
    let err = repo.add(&invalid).unwrap_err();

    assert!(matches!(
        err,
        RepoError::Validation(EntryValidationError::LevelOutOfRange { level }) if level == 10.1
    ));
    assert_eq!(repo.count().unwrap(), 1);
    assert_eq!(repo.get_all().unwrap().len(), 1);
}

#[test]
fn add_rejects_nan_level() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let invalid = PainEntry {
        timestamp_ms: 1,
        level: f64::NAN,
    };
    let err = repo.add(&invalid).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(EntryValidationError::NonFiniteLevel)
    ));
    assert_eq!(repo.count().unwrap(), 0);
}

#[test]
fn remove_deletes_by_timestamp_and_ignores_missing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let kept = PainEntry::new(1_000, 1.0).unwrap();
    let dropped = PainEntry::new(2_000, 8.0).unwrap();
    repo.add(&kept).unwrap();
    repo.add(&dropped).unwrap();

    // Level is irrelevant for removal; only the timestamp key matters.
    repo.remove(&PainEntry::new(2_000, 0.0).unwrap()).unwrap();
    repo.remove(&PainEntry::new(9_999, 5.0).unwrap()).unwrap();

    assert_eq!(repo.get_all().unwrap(), vec![kept]);
    assert!(!repo.remove_at(2_000).unwrap());
    assert!(repo.remove_at(1_000).unwrap());
    assert!(repo.get_all().unwrap().is_empty());
}

#[test]
fn get_all_surfaces_corrupt_rows_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    // Simulate a row written before the check constraint existed.
    conn.execute_batch(
        "PRAGMA ignore_check_constraints = ON;
         INSERT INTO pain_entries (timestamp_ms, level) VALUES (42, 12.0);
         PRAGMA ignore_check_constraints = OFF;",
    )
    .unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let err = repo.get_all().unwrap_err();
    match err {
        RepoError::InvalidData(message) => assert!(message.contains("42"), "{message}"),
        other => panic!("unexpected error: {other}"),
    }
}
