// SQLite persistence layer for consultation drafts and submissions.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

/// Key-value storage for serialized consultation drafts.
///
/// The portal persists at most one draft per consultation key; callers own
/// the key derivation and payload format. Implementations must make `set`
/// overwrite and `delete` tolerate missing keys.
pub trait DraftStore {
    /// Return the stored payload for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous payload.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry for `key`. Removing a missing key is a no-op.
    fn delete(&self, key: &str) -> Result<()>;
}

/// SQLite-backed persistence for consultation drafts and submitted
/// consultations.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) a SQLite database at `path` and ensure all tables
    /// exist. Pass `":memory:"` for an ephemeral in-memory database (useful
    /// for tests).
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {path}"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;
             PRAGMA foreign_keys = ON;",
        )
        .context("failed to set database pragmas")?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS drafts (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS submissions (
                id             INTEGER PRIMARY KEY AUTOINCREMENT,
                appointment_id TEXT,
                patient_id     TEXT,
                payload        TEXT NOT NULL,
                submitted_at   TEXT NOT NULL
            );
            ",
        )
        .context("failed to create database schema")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the database connection.
    ///
    /// Panics if the mutex is poisoned (another thread panicked while
    /// holding the lock). This should never happen in normal operation.
    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("database mutex poisoned")
    }

    /// Record a submitted consultation. The full draft payload is kept as
    /// JSON; `appointment_id` is `None` for consultations started outside an
    /// appointment.
    pub fn record_submission(
        &self,
        appointment_id: Option<&str>,
        patient_id: Option<&str>,
        payload: &str,
    ) -> Result<()> {
        let conn = self.conn();
        let submitted_at = chrono::Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO submissions (appointment_id, patient_id, payload, submitted_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![appointment_id, patient_id, payload, submitted_at],
        )
        .context("failed to record submission")?;
        Ok(())
    }

    /// Return the number of recorded submissions.
    pub fn submission_count(&self) -> Result<usize> {
        let conn = self.conn();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM submissions", [], |row| row.get(0))
            .context("failed to count submissions")?;
        Ok(count as usize)
    }
}

impl DraftStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn();
        let mut stmt = conn
            .prepare("SELECT value FROM drafts WHERE key = ?1")
            .context("failed to prepare draft lookup")?;

        let mut rows = stmt
            .query_map(params![key], |row| row.get::<_, String>(0))
            .context("failed to query draft")?;

        match rows.next() {
            Some(row) => Ok(Some(row.context("failed to read draft row")?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn();
        conn.execute(
            "INSERT OR REPLACE INTO drafts (key, value) VALUES (?1, ?2)",
            params![key, value],
        )
        .context("failed to save draft")?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let conn = self.conn();
        conn.execute("DELETE FROM drafts WHERE key = ?1", params![key])
            .context("failed to delete draft")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: create a fresh in-memory database for each test.
    fn test_db() -> Database {
        Database::open(":memory:").expect("in-memory database should open")
    }

    // ------------------------------------------------------------------
    // Schema / open
    // ------------------------------------------------------------------

    #[test]
    fn open_creates_tables() {
        let db = test_db();
        let conn = db.conn();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"drafts".to_string()));
        assert!(tables.contains(&"submissions".to_string()));
    }

    // ------------------------------------------------------------------
    // DraftStore
    // ------------------------------------------------------------------

    #[test]
    fn set_and_get_round_trip() {
        let db = test_db();
        db.set("consultation-draft-7", r#"{"plan":"rest"}"#).unwrap();

        let loaded = db.get("consultation-draft-7").unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"{"plan":"rest"}"#));
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let db = test_db();
        assert!(db.get("consultation-draft-new").unwrap().is_none());
    }

    #[test]
    fn set_overwrites_previous_value() {
        let db = test_db();
        db.set("k", "first").unwrap();
        db.set("k", "second").unwrap();

        assert_eq!(db.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn delete_removes_entry() {
        let db = test_db();
        db.set("k", "v").unwrap();
        db.delete("k").unwrap();

        assert!(db.get("k").unwrap().is_none());
    }

    #[test]
    fn delete_missing_key_is_noop() {
        let db = test_db();
        db.delete("never-written").unwrap();
    }

    #[test]
    fn keys_are_independent() {
        let db = test_db();
        db.set("consultation-draft-1", "a").unwrap();
        db.set("consultation-draft-2", "b").unwrap();

        db.delete("consultation-draft-1").unwrap();

        assert!(db.get("consultation-draft-1").unwrap().is_none());
        assert_eq!(db.get("consultation-draft-2").unwrap().as_deref(), Some("b"));
    }

    // ------------------------------------------------------------------
    // Submissions
    // ------------------------------------------------------------------

    #[test]
    fn record_submission_stores_row() {
        let db = test_db();
        assert_eq!(db.submission_count().unwrap(), 0);

        db.record_submission(Some("7"), Some("3"), r#"{"assessment":"flu"}"#)
            .unwrap();
        assert_eq!(db.submission_count().unwrap(), 1);

        let conn = db.conn();
        let (appt, patient, payload, at): (Option<String>, Option<String>, String, String) = conn
            .query_row(
                "SELECT appointment_id, patient_id, payload, submitted_at FROM submissions",
                [],
                |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
                },
            )
            .unwrap();
        assert_eq!(appt.as_deref(), Some("7"));
        assert_eq!(patient.as_deref(), Some("3"));
        assert_eq!(payload, r#"{"assessment":"flu"}"#);
        assert!(!at.is_empty());
    }

    #[test]
    fn record_submission_allows_missing_appointment() {
        let db = test_db();
        db.record_submission(None, Some("3"), "{}").unwrap();
        assert_eq!(db.submission_count().unwrap(), 1);
    }
}
