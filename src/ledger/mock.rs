//! Test double for an unavailable ledger.

use async_trait::async_trait;

use super::error::LedgerError;
use super::{Ledger, LedgerRecord};

/// A ledger whose every write fails, for exercising the best-effort
/// persistence paths of the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct FailingLedger;

impl FailingLedger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Ledger for FailingLedger {
    async fn upsert(&self, _record: &LedgerRecord) -> Result<(), LedgerError> {
        Err(LedgerError::Unavailable("connection refused".to_string()))
    }

    async fn increment(&self, _id: &str) -> Result<(), LedgerError> {
        Err(LedgerError::Unavailable("connection refused".to_string()))
    }

    async fn fetch(&self, _id: &str) -> Result<Option<LedgerRecord>, LedgerError> {
        Err(LedgerError::Unavailable("connection refused".to_string()))
    }
}
