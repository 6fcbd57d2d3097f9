//! Agricultural Intelligence Data Service - Backend
//!
//! Aggregates weather (IMD), market price (Agmarknet/eNAM) and research
//! extension (ICAR/KVK) data into role-specific dashboard views, and
//! ingests farmer incident reports.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

pub use config::Config;

use services::{AuthService, DataIntegrationService, SessionStore, SyntheticRng};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub integration: DataIntegrationService,
    pub auth: Arc<AuthService>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Build every service from configuration
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let http = external::build_http_client()?;
        let rng = Arc::new(SyntheticRng::from_seed_option(config.synthetic.seed));
        let integration = DataIntegrationService::from_upstream(http, &config.upstream, rng);

        let auth = AuthService::with_demo_accounts(&config.auth.demo_password, config.auth.bcrypt_cost)?;
        let sessions = SessionStore::with_system_clock(chrono::Duration::hours(
            config.auth.session_ttl_hours,
        ));

        Ok(Self {
            config: Arc::new(config),
            integration,
            auth: Arc::new(auth),
            sessions: Arc::new(sessions),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
