use paindiary_core::db::migrations::latest_version;
use paindiary_core::db::{open_db, open_db_in_memory, DbError};
use paindiary_core::{EntryRepository, PainEntry, RepoError, SqliteEntryRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "pain_entries");
}

#[test]
fn entries_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("diary.db");

    let conn_first = open_db(&path).unwrap();
    SqliteEntryRepository::try_new(&conn_first)
        .unwrap()
        .add(&PainEntry::new(1_700_000_000_000, 6.0).unwrap())
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let entries = SqliteEntryRepository::try_new(&conn_second)
        .unwrap()
        .get_all()
        .unwrap();
    assert_eq!(entries, vec![PainEntry::new(1_700_000_000_000, 6.0).unwrap()]);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn open_failure_names_the_target_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("diary.db");

    let err = open_db(&path).unwrap_err();
    match &err {
        DbError::Open { target, .. } => assert_eq!(target, &path.display().to_string()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("diary.db"), "{err}");
}

#[test]
fn failed_migration_reports_version_and_rolls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clash.db");

    // An index already owns the table name, so the first migration cannot run.
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE legacy (value INTEGER);
         CREATE INDEX pain_entries ON legacy (value);",
    )
    .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(
        matches!(err, DbError::Migration { version: 1, .. }),
        "unexpected error: {err}"
    );

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn), 0);
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteEntryRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::SchemaMismatch { found: 0, expected } if expected == latest_version()
    ));
}

#[test]
fn table_check_constraint_blocks_out_of_range_levels() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO pain_entries (timestamp_ms, level) VALUES (1, 11.0);",
        [],
    );
    assert!(result.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
