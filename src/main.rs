//! Parrot HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use parrot::backend::OllamaBackend;
use parrot::cache::{CacheStore, MemoryStore, RedisStore};
use parrot::config::{CacheMode, Config};
use parrot::dispatch::Dispatcher;
use parrot::gateway::{AppState, create_router_with_state};
use parrot::health::HealthMonitor;
use parrot::ledger::SqliteLedger;
use parrot::scoring::TokenOverlapScorer;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        model = %config.ollama_model,
        "Parrot starting"
    );

    if let Some(parent) = config.ledger_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let ledger = SqliteLedger::open(&config.ledger_path)?;

    let backend = OllamaBackend::new(
        &config.ollama_url,
        &config.ollama_model,
        config.generate_timeout,
    )?;
    let scorer = TokenOverlapScorer::new();

    match config.cache_mode {
        CacheMode::Redis => {
            let cache = RedisStore::from_url(&config.redis_url)?;
            serve(addr, &config, cache, ledger, backend, scorer).await
        }
        CacheMode::Memory => {
            tracing::warn!("using the in-process cache store, entries will not survive a restart");
            serve(addr, &config, MemoryStore::new(), ledger, backend, scorer).await
        }
    }
}

async fn serve<C>(
    addr: SocketAddr,
    config: &Config,
    cache: C,
    ledger: SqliteLedger,
    backend: OllamaBackend,
    scorer: TokenOverlapScorer,
) -> anyhow::Result<()>
where
    C: CacheStore + Clone + 'static,
{
    let dispatcher = Arc::new(Dispatcher::new(
        cache.clone(),
        ledger,
        backend.clone(),
        scorer,
        config.answer_ttl,
    ));
    let monitor = Arc::new(HealthMonitor::new(cache, backend));
    let app = create_router_with_state(AppState::new(dispatcher, monitor));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Parrot shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("PARROT_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    let url = format!("http://127.0.0.1:{}/health", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
