//! Durable ledger of every processed question.
//!
//! One row per question id. The first computed answer and score are
//! permanent; every later completed request for the same id only bumps the
//! occurrence counter. Rows are never deleted.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod sqlite;


pub use error::LedgerError;
#[cfg(any(test, feature = "mock"))]
pub use mock::FailingLedger;
pub use sqlite::SqliteLedger;

use async_trait::async_trait;

/// A durable row keyed by question id.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRecord {
    pub id: String,
    /// The question text as asked.
    pub question: String,
    /// The human reference answer the score was computed against.
    pub reference: String,
    /// The first computed answer for this id.
    pub answer: String,
    pub score: f64,
    /// Completed requests observed for this id. Monotone, starts at 1.
    pub count: i64,
}

impl LedgerRecord {
    /// Builds the row for a first occurrence (`count = 1`).
    pub fn first_occurrence(
        id: impl Into<String>,
        question: impl Into<String>,
        reference: impl Into<String>,
        answer: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            reference: reference.into(),
            answer: answer.into(),
            score,
            count: 1,
        }
    }
}

/// Durable store with insert-once, increment-on-conflict semantics.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Inserts `record` with `count = 1`. If the id already exists,
    /// increments the stored count by one and leaves every other column
    /// untouched. Must be a single atomic conditional write, never a
    /// read-modify-write pair.
    async fn upsert(&self, record: &LedgerRecord) -> Result<(), LedgerError>;

    /// Increments the count of an existing row by one. A missing row is a
    /// no-op: the cache and ledger are independent stores and may diverge.
    async fn increment(&self, id: &str) -> Result<(), LedgerError>;

    /// Reads a row back. The dispatcher never calls this; it exists for
    /// tests and offline inspection.
    async fn fetch(&self, id: &str) -> Result<Option<LedgerRecord>, LedgerError>;
}
