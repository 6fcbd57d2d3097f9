//! Integrated data endpoints
//!
//! Both endpoints answer with the `{success, data}` envelope on success and
//! a fixed generic message on any failure.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use shared::{ApiResponse, FarmerReport, FarmerReportInput, Location, RoleView};

use crate::error::ApiFailure;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct IntegratedQuery {
    pub role: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
}

/// A query value, or `default` when missing or blank
fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Role-projected integrated bundle for a location
pub async fn get_integrated_data(
    State(state): State<AppState>,
    Query(query): Query<IntegratedQuery>,
) -> Result<Json<ApiResponse<RoleView>>, ApiFailure> {
    let defaults = &state.config.defaults;
    let role = or_default(query.role, &defaults.role);
    let location = Location::new(
        or_default(query.state, &defaults.state),
        or_default(query.district, &defaults.district),
    );

    match state.integration.get_dashboard_analytics(&role, &location).await {
        Ok(view) => Ok(Json(ApiResponse::timestamped(view, Utc::now()))),
        Err(err) => {
            tracing::error!("Integrated data request failed: {}", err);
            Err(ApiFailure::INTEGRATED_DATA)
        }
    }
}

/// Ingest a partial farmer report
pub async fn submit_farmer_report(
    State(state): State<AppState>,
    payload: Result<Json<FarmerReportInput>, JsonRejection>,
) -> Result<Json<ApiResponse<FarmerReport>>, ApiFailure> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::error!("Unreadable farmer report: {}", rejection.body_text());
        ApiFailure::FARMER_REPORT
    })?;

    match state.integration.process_farmer_report(input) {
        Ok(report) => Ok(Json(ApiResponse::with_message(
            report,
            "Farmer report processed successfully",
        ))),
        Err(err) => {
            tracing::error!("Farmer report rejected: {}", err);
            Err(ApiFailure::FARMER_REPORT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_values_use_defaults() {
        assert_eq!(or_default(None, "Delhi"), "Delhi");
        assert_eq!(or_default(Some("  ".into()), "Delhi"), "Delhi");
        assert_eq!(or_default(Some("Punjab".into()), "Delhi"), "Punjab");
    }
}
