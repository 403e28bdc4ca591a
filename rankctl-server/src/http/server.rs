//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS by default (public leaderboard), localhost-only optional
//! - Tracing middleware
//! - Background seeding once the listener is bound
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rankctl_core::{seed_participants, RankIndex};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::churn::ChurnPolicy;
use crate::state::AppState;

/// Participants generated at startup unless configured otherwise
pub const DEFAULT_SEED_COUNT: usize = 10_000;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// Allow any origin (default: true)
    ///
    /// When false only localhost origins on ports 3000, 5173 and 8080
    /// are allowed.
    pub cors_permissive: bool,

    /// Synthetic participants inserted after startup
    pub seed_count: usize,

    /// Bulk churn sizing for `POST /update-score`
    pub churn: ChurnPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_permissive: true,
            seed_count: DEFAULT_SEED_COUNT,
            churn: ChurnPolicy::default(),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("http://localhost:8080"),
                HeaderValue::from_static("http://127.0.0.1:3000"),
                HeaderValue::from_static("http://127.0.0.1:5173"),
                HeaderValue::from_static("http://127.0.0.1:8080"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::leaderboard::router())
        .merge(routes::users::router())
        .merge(routes::scores::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let index = Arc::new(RankIndex::new());
/// run_server(index, ServerConfig::default()).await?;
/// ```
pub async fn run_server(index: Arc<RankIndex>, config: ServerConfig) -> Result<(), ServerError> {
    if !config.cors_permissive {
        tracing::info!("CORS: localhost origins only");
    }

    let state = AppState::new(Arc::clone(&index), config.churn);
    let app = build_router(state, &config);

    // Bind before seeding so the port is reachable immediately
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);
    log_endpoints();

    if config.seed_count > 0 {
        let count = config.seed_count;
        tokio::task::spawn_blocking(move || {
            let mut rng = StdRng::from_entropy();
            seed_participants(&index, count, &mut rng);
        });
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn log_endpoints() {
    tracing::info!("GET  /leaderboard?limit=N&offset=M  - ranked page");
    tracing::info!("GET  /user/{{username}}               - single user rank");
    tracing::info!("POST /update-score                   - randomize ratings");
    tracing::info!("POST /update-user-score              - set one user's rating");
    tracing::info!("GET  /health                         - liveness");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
