use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::backend::ComputeBackend;
use crate::cache::{CacheStore, CachedAnswer, answer_key};
use crate::ledger::{Ledger, LedgerRecord};
use crate::scoring::AnswerScorer;

use super::error::DispatchError;
use super::Question;

/// Orchestrates one question through cache, compute, scoring, and ledger.
///
/// Constructed once at startup with its four collaborators and shared across
/// request tasks; it holds no other state than the cache TTL.
///
/// Lookup and the subsequent cache write are not atomic. Two concurrent
/// requests for a never-seen id can both miss, both call the backend, and
/// both write: the cache keeps whichever write lands last and the ledger
/// counts both completions. That outcome is accepted; the answering path
/// never blocks on a per-id lock, and the counter still reflects one
/// increment per completed request.
pub struct Dispatcher<C, L, B, S> {
    cache: C,
    ledger: L,
    backend: B,
    scorer: S,
    ttl: Duration,
}

impl<C, L, B, S> Dispatcher<C, L, B, S>
where
    C: CacheStore,
    L: Ledger,
    B: ComputeBackend,
    S: AnswerScorer,
{
    pub fn new(cache: C, ledger: L, backend: B, scorer: S, ttl: Duration) -> Self {
        Self {
            cache,
            ledger,
            backend,
            scorer,
            ttl,
        }
    }

    /// TTL applied to every cache write.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Answers `question`, preferring the cache and falling back to the
    /// compute backend.
    ///
    /// Only a backend failure on a miss is fatal. Ledger writes are
    /// best-effort on both paths, and an unreachable cache degrades every
    /// lookup to a miss so answers keep flowing during an outage.
    pub async fn process(&self, question: &Question) -> Result<CachedAnswer, DispatchError> {
        let key = answer_key(&question.id);

        match self.cache.get(&key).await {
            Ok(Some(entry)) => {
                debug!(id = %question.id, "cache hit");
                if let Err(e) = self.ledger.increment(&question.id).await {
                    warn!(id = %question.id, error = %e, "ledger increment failed after cache hit");
                }
                return Ok(entry.into_hit());
            }
            Ok(None) => {
                debug!(id = %question.id, "cache miss");
            }
            Err(e) => {
                warn!(id = %question.id, error = %e, "cache unreachable, treating lookup as miss");
            }
        }

        let answer = self
            .backend
            .generate(&question.prompt)
            .await
            .map_err(|source| DispatchError::Compute {
                id: question.id.clone(),
                source,
            })?;

        let score = self.scorer.score(&answer, &question.reference);
        let fresh = CachedAnswer::computed(answer, score);

        if let Err(e) = self.cache.put(&key, &fresh, self.ttl).await {
            warn!(id = %question.id, error = %e, "cache write failed, serving uncached");
        }

        let record = LedgerRecord::first_occurrence(
            question.id.clone(),
            question.prompt.clone(),
            question.reference.clone(),
            fresh.answer.clone(),
            fresh.score,
        );
        if let Err(e) = self.ledger.upsert(&record).await {
            error!(id = %question.id, error = %e, "ledger upsert failed, answer served without a durable record");
        }

        info!(id = %question.id, score = fresh.score, "answer computed");
        Ok(fresh)
    }
}

impl<C, L, B, S> std::fmt::Debug for Dispatcher<C, L, B, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").field("ttl", &self.ttl).finish()
    }
}
