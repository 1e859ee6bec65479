//! HTTP gateway (axum) over the dispatcher.
//!
//! Realizes the JSON contract: `POST /process` answers a question,
//! `GET /health` reports dependency liveness. Load generation, retries,
//! and pacing all live in the external client.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorResponse};
pub use handler::{health_handler, process_handler};
pub use payload::ProcessRequest;
pub use state::AppState;

use crate::backend::ComputeBackend;
use crate::cache::CacheStore;
use crate::ledger::Ledger;
use crate::scoring::AnswerScorer;

/// Response header carrying answer provenance (`cache` or `llm`).
pub const SOURCE_HEADER: &str = "X-Parrot-Source";

pub fn create_router_with_state<C, L, B, S>(state: AppState<C, L, B, S>) -> Router
where
    C: CacheStore + 'static,
    L: Ledger + 'static,
    B: ComputeBackend + 'static,
    S: AnswerScorer + 'static,
{
    Router::new()
        .route("/process", post(process_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
