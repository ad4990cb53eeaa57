//! Entry store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert-or-replace, remove and list APIs over `pain_entries`.
//!
//! # Invariants
//! - At most one row per `timestamp_ms`.
//! - Each mutation is a single autocommitted statement; there is no
//!   buffered write window.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::entry::{EntryTimestamp, EntryValidationError, PainEntry};
use log::{debug, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    InvalidData(String),
    SchemaMismatch { found: u32, expected: u32 },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry: {message}"),
            Self::SchemaMismatch { found, expected } => write!(
                f,
                "connection schema version {found} does not match expected {expected}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::SchemaMismatch { .. } => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable keyed collection of pain entries.
pub trait EntryRepository {
    /// Inserts `entry`, replacing any entry with the same timestamp.
    fn add(&self, entry: &PainEntry) -> RepoResult<()>;
    /// Deletes the entry with `entry.timestamp_ms`; absent rows are a no-op.
    fn remove(&self, entry: &PainEntry) -> RepoResult<()>;
    /// Returns every stored entry. Callers must not rely on ordering.
    fn get_all(&self) -> RepoResult<Vec<PainEntry>>;
}

/// SQLite-backed entry store.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`].
    ///
    /// # Errors
    /// - `SchemaMismatch` when the connection was not migrated to the latest
    ///   schema version.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let found = current_version(conn)?;
        let expected = latest_version();
        if found != expected {
            return Err(RepoError::SchemaMismatch { found, expected });
        }
        Ok(Self { conn })
    }

    /// Removes the entry stored at `timestamp_ms`.
    ///
    /// Returns whether a row was deleted.
    pub fn remove_at(&self, timestamp_ms: EntryTimestamp) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM pain_entries WHERE timestamp_ms = ?1;",
            [timestamp_ms],
        )?;
        debug!("event=entry_remove module=repo status=ok removed={}", changed > 0);
        Ok(changed > 0)
    }

    /// Number of stored entries.
    pub fn count(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pain_entries;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count {count}")))
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn add(&self, entry: &PainEntry) -> RepoResult<()> {
        entry.validate()?;

        self.conn.execute(
            "INSERT INTO pain_entries (timestamp_ms, level) VALUES (?1, ?2)
             ON CONFLICT(timestamp_ms) DO UPDATE SET level = excluded.level;",
            params![entry.timestamp_ms, entry.level],
        )?;

        info!("event=entry_add module=repo status=ok");
        Ok(())
    }

    fn remove(&self, entry: &PainEntry) -> RepoResult<()> {
        self.remove_at(entry.timestamp_ms).map(|_| ())
    }

    fn get_all(&self) -> RepoResult<Vec<PainEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT timestamp_ms, level FROM pain_entries ORDER BY timestamp_ms ASC;")?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        debug!(
            "event=entry_list module=repo status=ok count={}",
            entries.len()
        );
        Ok(entries)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<PainEntry> {
    let timestamp_ms: i64 = row.get("timestamp_ms")?;
    let level: f64 = row.get("level")?;
    PainEntry::new(timestamp_ms, level).map_err(|err| {
        RepoError::InvalidData(format!(
            "pain_entries.level at timestamp {timestamp_ms}: {err}"
        ))
    })
}
