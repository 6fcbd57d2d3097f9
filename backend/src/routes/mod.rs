//! Route definitions for the agricultural intelligence service

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::require_session, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Integrated dashboard data and farmer reports (public)
        .route(
            "/data/integrated",
            get(handlers::get_integrated_data).post(handlers::submit_farmer_report),
        )
        // Direct adapter reads (public)
        .nest("/weather", weather_routes())
        .nest("/market", market_routes())
        .nest("/research", research_routes())
        // Auth routes
        .nest("/auth", auth_routes(state))
}

fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_weather))
        .route("/forecast", get(handlers::get_weather_forecast))
}

fn market_routes() -> Router<AppState> {
    Router::new()
        .route("/prices", get(handlers::get_market_prices))
        .route("/enam/:commodity", get(handlers::get_enam_prices))
        .route("/analytics/:commodity", get(handlers::get_market_analytics))
}

fn research_routes() -> Router<AppState> {
    Router::new()
        .route("/varieties/:crop", get(handlers::get_crop_varieties))
        .route("/kvk", get(handlers::get_kvk_data))
        .route("/publications", get(handlers::get_research_publications))
}

/// Login is public; session and logout require a live session
fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/session", get(handlers::current_session))
        .route("/logout", post(handlers::logout))
        .route_layer(middleware::from_fn_with_state(state, require_session));

    Router::new()
        .route("/login", post(handlers::login))
        .merge(protected)
}
