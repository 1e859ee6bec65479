use serde::{Deserialize, Serialize};

/// Provenance tag on an answer: served from cache or freshly computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerSource {
    Cache,
    Llm,
}

impl AnswerSource {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::Cache => "cache",
            AnswerSource::Llm => "llm",
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, AnswerSource::Cache)
    }
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scored answer as stored in the cache and returned to callers.
///
/// The stored form always carries `source: llm` (the provenance at compute
/// time); [`CachedAnswer::into_hit`] re-tags a copy served from cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedAnswer {
    pub answer: String,
    pub score: f64,
    pub source: AnswerSource,
}

impl CachedAnswer {
    /// Builds a freshly computed answer (`source: llm`).
    pub fn computed(answer: String, score: f64) -> Self {
        Self {
            answer,
            score,
            source: AnswerSource::Llm,
        }
    }

    /// Re-tags this answer as served from cache.
    #[inline]
    pub fn into_hit(mut self) -> Self {
        self.source = AnswerSource::Cache;
        self
    }
}

/// Derives the cache key for a question id.
#[inline]
pub fn answer_key(id: &str) -> String {
    format!("question:{id}")
}
