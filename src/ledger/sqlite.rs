//! SQLite-backed ledger.
//!
//! The connection is shared behind a mutex and every call runs on the
//! blocking pool. `upsert` relies on SQLite's row-level
//! `INSERT .. ON CONFLICT DO UPDATE` so concurrent writers for the same id
//! cannot lose counter updates.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, params};

use super::error::LedgerError;
use super::{Ledger, LedgerRecord};

/// Durable ledger stored in a single SQLite database.
#[derive(Clone)]
pub struct SqliteLedger {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteLedger {
    /// Opens (or creates) the database at `path` and ensures the schema.
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory database. Each call returns an independent store.
    pub fn open_in_memory() -> Result<Self, LedgerError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, LedgerError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS responses (
                id TEXT PRIMARY KEY,
                question TEXT NOT NULL,
                human_answer TEXT NOT NULL,
                llm_answer TEXT NOT NULL,
                score REAL NOT NULL,
                count INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            );
        "#,
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, LedgerError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        let result = tokio::task::spawn_blocking(move || {
            let guard = conn.lock();
            f(&guard)
        })
        .await?;
        Ok(result?)
    }
}

impl std::fmt::Debug for SqliteLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteLedger").finish_non_exhaustive()
    }
}

#[async_trait]
impl Ledger for SqliteLedger {
    async fn upsert(&self, record: &LedgerRecord) -> Result<(), LedgerError> {
        let record = record.clone();
        let created_at = Utc::now().to_rfc3339();

        self.with_conn(move |conn| {
            conn.execute(
                r#"
                INSERT INTO responses (id, question, human_answer, llm_answer, score, count, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)
                ON CONFLICT(id) DO UPDATE SET count = count + 1
                "#,
                params![
                    record.id,
                    record.question,
                    record.reference,
                    record.answer,
                    record.score,
                    created_at
                ],
            )
            .map(|_| ())
        })
        .await
    }

    async fn increment(&self, id: &str) -> Result<(), LedgerError> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            conn.execute(
                "UPDATE responses SET count = count + 1 WHERE id = ?1",
                params![id],
            )
            .map(|_| ())
        })
        .await
    }

    async fn fetch(&self, id: &str) -> Result<Option<LedgerRecord>, LedgerError> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            conn.query_row(
                r#"
                SELECT id, question, human_answer, llm_answer, score, count
                FROM responses WHERE id = ?1
                "#,
                params![id],
                |row| {
                    Ok(LedgerRecord {
                        id: row.get(0)?,
                        question: row.get(1)?,
                        reference: row.get(2)?,
                        answer: row.get(3)?,
                        score: row.get(4)?,
                        count: row.get(5)?,
                    })
                },
            )
            .optional()
        })
        .await
    }
}
