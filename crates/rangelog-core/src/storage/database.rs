//! SQLite-based session storage.
//!
//! Provides persistent storage for:
//! - Logged practice sessions across all categories
//! - A key-value store for application state (the active drill session)
//!
//! Session payloads are category-specific and stored as JSON; the date
//! and category columns carry everything the dashboard queries need.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DatabaseError, Result};
use crate::session::{Category, SessionRecord};
use crate::stats::CategoryCount;

use super::data_dir;

const DATE_FMT: &str = "%Y-%m-%d";

/// SQLite database for practice session storage.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/rangelog/rangelog.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("rangelog.db");
        let conn = Connection::open(&path).map_err(|source| DatabaseError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(DatabaseError::from)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS practice_sessions (
                    id       INTEGER PRIMARY KEY AUTOINCREMENT,
                    category TEXT NOT NULL,
                    date     TEXT NOT NULL,
                    payload  TEXT NOT NULL DEFAULT '{}'
                );

                CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_sessions_date ON practice_sessions(date);
                CREATE INDEX IF NOT EXISTS idx_sessions_category_date
                    ON practice_sessions(category, date);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }

    /// Append a session for a category.
    ///
    /// # Errors
    /// Returns an error if the payload cannot be serialized or the insert
    /// fails.
    pub fn record_session<T: Serialize>(
        &self,
        category: Category,
        date: NaiveDate,
        payload: &T,
    ) -> Result<i64> {
        let json = serde_json::to_string(payload)?;
        self.conn
            .execute(
                "INSERT INTO practice_sessions (category, date, payload) VALUES (?1, ?2, ?3)",
                params![category.key(), date.format(DATE_FMT).to_string(), json],
            )
            .map_err(DatabaseError::from)?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All sessions for one category, oldest first.
    pub fn sessions(&self, category: Category) -> Result<Vec<SessionRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, category, date, payload FROM practice_sessions
                 WHERE category = ?1 ORDER BY date, id",
            )
            .map_err(DatabaseError::from)?;
        let rows = stmt
            .query_map(params![category.key()], row_to_parts)
            .map_err(DatabaseError::from)?;
        collect_records(rows)
    }

    /// All sessions across categories, oldest first.
    pub fn all_sessions(&self) -> Result<Vec<SessionRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, category, date, payload FROM practice_sessions ORDER BY date, id")
            .map_err(DatabaseError::from)?;
        let rows = stmt.query_map([], row_to_parts).map_err(DatabaseError::from)?;
        collect_records(rows)
    }

    /// Sessions for one category decoded into their payload type.
    pub fn sessions_as<T: DeserializeOwned>(
        &self,
        category: Category,
    ) -> Result<Vec<(i64, NaiveDate, T)>> {
        self.sessions(category)?
            .into_iter()
            .map(|record| {
                let payload = serde_json::from_value(record.payload)?;
                Ok((record.id, record.date, payload))
            })
            .collect()
    }

    /// Delete a session by id.
    ///
    /// # Errors
    /// Returns [`DatabaseError::SessionNotFound`] if no row matches.
    pub fn delete_session(&self, id: i64) -> Result<()> {
        let affected = self
            .conn
            .execute("DELETE FROM practice_sessions WHERE id = ?1", params![id])
            .map_err(DatabaseError::from)?;
        if affected == 0 {
            return Err(DatabaseError::SessionNotFound { id }.into());
        }
        Ok(())
    }

    /// Distinct practice dates across all categories, ascending.
    pub fn practice_dates(&self) -> Result<Vec<NaiveDate>> {
        let mut stmt = self
            .conn
            .prepare("SELECT DISTINCT date FROM practice_sessions ORDER BY date")
            .map_err(DatabaseError::from)?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(DatabaseError::from)?;

        let mut dates = Vec::new();
        for row in rows {
            let raw = row.map_err(DatabaseError::from)?;
            let date = NaiveDate::parse_from_str(&raw, DATE_FMT).map_err(|e| {
                DatabaseError::QueryFailed(format!("bad date '{raw}' in practice_sessions: {e}"))
            })?;
            dates.push(date);
        }
        Ok(dates)
    }

    /// Session counts per category, in display order, zeros included.
    pub fn category_counts(&self) -> Result<Vec<CategoryCount>> {
        let mut stmt = self
            .conn
            .prepare("SELECT category, COUNT(*) FROM practice_sessions GROUP BY category")
            .map_err(DatabaseError::from)?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, u64>(1)?))
            })
            .map_err(DatabaseError::from)?;

        let mut counted = std::collections::HashMap::new();
        for row in rows {
            let (key, count) = row.map_err(DatabaseError::from)?;
            counted.insert(key, count);
        }

        Ok(Category::all()
            .into_iter()
            .map(|category| CategoryCount {
                category,
                sessions: counted.get(category.key()).copied().unwrap_or(0),
            })
            .collect())
    }

    // ── Key-value store ──────────────────────────────────────────────

    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(DatabaseError::from)?;
        Ok(value)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(DatabaseError::from)?;
        Ok(())
    }

    pub fn kv_delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(DatabaseError::from)?;
        Ok(())
    }
}

fn row_to_parts(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, String, String, String)> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
    ))
}

fn collect_records(
    rows: impl Iterator<Item = rusqlite::Result<(i64, String, String, String)>>,
) -> Result<Vec<SessionRecord>> {
    let mut records = Vec::new();
    for row in rows {
        let (id, category_key, date_raw, payload_raw) = row.map_err(DatabaseError::from)?;
        let category = Category::from_key(&category_key).ok_or_else(|| {
            DatabaseError::QueryFailed(format!("unknown category '{category_key}'"))
        })?;
        let date = NaiveDate::parse_from_str(&date_raw, DATE_FMT).map_err(|e| {
            DatabaseError::QueryFailed(format!("bad date '{date_raw}': {e}"))
        })?;
        let payload = serde_json::from_str(&payload_raw)?;
        records.push(SessionRecord {
            id,
            category,
            date,
            payload,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::BallStrikingLog;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_record_and_list_sessions() {
        let db = Database::open_memory().unwrap();
        let log = BallStrikingLog {
            towel_drill_3x: Some(3),
            ..Default::default()
        };
        let id = db
            .record_session(Category::BallStriking, d("2026-03-10"), &log)
            .unwrap();
        assert!(id > 0);

        let sessions = db.sessions(Category::BallStriking).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].date, d("2026-03-10"));
        assert_eq!(sessions[0].payload["towel_drill_3x"], 3);

        assert!(db.sessions(Category::Putting).unwrap().is_empty());
    }

    #[test]
    fn test_sessions_as_decodes_payload() {
        let db = Database::open_memory().unwrap();
        let log = BallStrikingLog {
            jump_the_ball: Some(12),
            ..Default::default()
        };
        db.record_session(Category::BallStriking, d("2026-03-10"), &log)
            .unwrap();

        let decoded: Vec<(i64, NaiveDate, BallStrikingLog)> =
            db.sessions_as(Category::BallStriking).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].2.jump_the_ball, Some(12));
    }

    #[test]
    fn test_delete_session() {
        let db = Database::open_memory().unwrap();
        let id = db
            .record_session(
                Category::Putting,
                d("2026-03-10"),
                &serde_json::json!({"three_foot_drill": 2}),
            )
            .unwrap();
        db.delete_session(id).unwrap();
        assert!(db.sessions(Category::Putting).unwrap().is_empty());
        assert!(db.delete_session(id).is_err());
    }

    #[test]
    fn test_practice_dates_distinct_sorted() {
        let db = Database::open_memory().unwrap();
        let payload = serde_json::json!({});
        db.record_session(Category::Putting, d("2026-03-11"), &payload).unwrap();
        db.record_session(Category::BallStriking, d("2026-03-10"), &payload).unwrap();
        db.record_session(Category::Putting, d("2026-03-10"), &payload).unwrap();

        let dates = db.practice_dates().unwrap();
        assert_eq!(dates, vec![d("2026-03-10"), d("2026-03-11")]);
    }

    #[test]
    fn test_category_counts_include_zeros() {
        let db = Database::open_memory().unwrap();
        db.record_session(Category::WedgeLadder, d("2026-03-10"), &serde_json::json!({}))
            .unwrap();

        let counts = db.category_counts().unwrap();
        assert_eq!(counts.len(), Category::all().len());
        let ladder = counts
            .iter()
            .find(|c| c.category == Category::WedgeLadder)
            .unwrap();
        assert_eq!(ladder.sessions, 1);
        let putting = counts
            .iter()
            .find(|c| c.category == Category::Putting)
            .unwrap();
        assert_eq!(putting.sessions, 0);
    }

    #[test]
    fn test_kv_roundtrip() {
        let db = Database::open_memory().unwrap();
        assert_eq!(db.kv_get("drill_session").unwrap(), None);
        db.kv_set("drill_session", "{}").unwrap();
        db.kv_set("drill_session", "{\"state\":\"idle\"}").unwrap();
        assert_eq!(
            db.kv_get("drill_session").unwrap().as_deref(),
            Some("{\"state\":\"idle\"}")
        );
        db.kv_delete("drill_session").unwrap();
        assert_eq!(db.kv_get("drill_session").unwrap(), None);
    }
}
