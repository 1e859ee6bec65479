//! Parrot library crate (used by the server binary and integration tests).
//!
//! Parrot answers questions cache-aside: a lookup in a TTL-bound key-value
//! store, a generative compute fallback on miss, a similarity score against
//! a reference answer, and a durable ledger row per question id whose
//! counter tracks every completed request.
//!
//! # Modules
//!
//! - [`dispatch`] - the request orchestration core ([`Dispatcher`])
//! - [`cache`] - volatile answer store ([`RedisStore`], [`MemoryStore`])
//! - [`ledger`] - durable insert-or-increment store ([`SqliteLedger`])
//! - [`backend`] - generative compute adapter ([`OllamaBackend`])
//! - [`scoring`] - candidate/reference similarity ([`TokenOverlapScorer`])
//! - [`health`] - dependency liveness reporting
//! - [`gateway`] - axum HTTP surface
//! - [`config`] - environment-backed settings
//!
//! Mock collaborators are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod backend;
pub mod cache;
pub mod config;
pub mod dispatch;
pub mod gateway;
pub mod health;
pub mod ledger;
pub mod scoring;

pub use backend::{BackendError, ComputeBackend, OllamaBackend};
#[cfg(any(test, feature = "mock"))]
pub use backend::MockBackend;

pub use cache::{AnswerSource, CacheError, CacheStore, CachedAnswer, MemoryStore, RedisStore, answer_key};
#[cfg(any(test, feature = "mock"))]
pub use cache::UnreachableStore;

pub use config::{CacheMode, Config, ConfigError};
pub use dispatch::{DispatchError, Dispatcher, Question};
pub use gateway::{ApiError, AppState, ProcessRequest, SOURCE_HEADER, create_router_with_state};
pub use health::{HealthMonitor, HealthReport};

pub use ledger::{Ledger, LedgerError, LedgerRecord, SqliteLedger};
#[cfg(any(test, feature = "mock"))]
pub use ledger::FailingLedger;

pub use scoring::{AnswerScorer, TokenOverlapScorer};
