//! Himalayan Sentinel Alert Server
//!
//! HTTP surface for the dashboard front end: snapshot summaries, alert
//! generation, alert history and export.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 HIMALAYAN SENTINEL API                   │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────────┐   ┌─────────────┐  │
//! │  │  Router   │──▶│  sentinel-core   │──▶│  AlertLog   │  │
//! │  │  (Axum)   │   │  (pure builder)  │   │  (RwLock)   │  │
//! │  └───────────┘   └──────────────────┘   └──────┬──────┘  │
//! │                                                ▼         │
//! │                                        ┌─────────────┐   │
//! │                                        │ JSONL store │   │
//! │                                        └─────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod error;
mod extract;


use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use parking_lot::Mutex;
use tokio::sync::RwLock;
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentinel_core::logic::alert::{load_history, AlertLog, AlertStore};
use sentinel_core::logic::telemetry::SectorReading;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sentinel_server=debug,sentinel_core=info,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Himalayan Sentinel server starting...");
    tracing::info!("Default threshold: {:.0}, audience: {}", config.default_threshold, config.default_audience);

    let state = AppState::new(config.clone())?;

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Newest-first alert history
    pub history: Arc<RwLock<AlertLog>>,
    /// Persistent store, when enabled
    pub store: Option<Arc<Mutex<AlertStore>>>,
    /// Snapshot from the most recent alert, bundled into exports
    pub last_snapshot: Arc<RwLock<Option<Vec<SectorReading>>>>,
    pub config: config::Config,
}

impl AppState {
    /// Open the store (if configured) and restore its history
    pub fn new(config: config::Config) -> anyhow::Result<Self> {
        let (history, store) = match &config.store_dir {
            Some(dir) => {
                tracing::info!("Alert store: {:?}", dir);
                let history = load_history(dir)?;
                let store = AlertStore::open(dir)?;
                (history, Some(Arc::new(Mutex::new(store))))
            }
            None => {
                tracing::warn!("Persistence disabled - alert history is in-memory only");
                (AlertLog::new(), None)
            }
        };

        Ok(Self {
            history: Arc::new(RwLock::new(history)),
            store,
            last_snapshot: Arc::new(RwLock::new(None)),
            config,
        })
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Alerts
        .route("/api/v1/alerts", get(handlers::alerts::list))
        .route("/api/v1/alerts", post(handlers::alerts::create))
        .route("/api/v1/alerts/:id", get(handlers::alerts::get))
        .route("/api/v1/export", get(handlers::alerts::export))

        // Telemetry
        .route("/api/v1/summary", post(handlers::summary::summarize_snapshot))

        // Analysis prompts
        .route("/api/v1/prompts", post(handlers::prompts::render));

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
