//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::WeatherBundle;

use super::validated_location;
use crate::error::{AppError, AppResult};
use crate::services::weather::DEFAULT_FORECAST_DAYS;
use crate::AppState;

/// Longest forecast the endpoint will generate
const MAX_FORECAST_DAYS: u32 = 30;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub state: Option<String>,
    pub district: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub state: Option<String>,
    pub district: Option<String>,
    pub days: Option<u32>,
}

/// Current conditions for a district
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Json<WeatherBundle>> {
    let location = validated_location(query.state, query.district)?;
    let bundle = state
        .integration
        .weather()
        .current_weather(&location.district, &location.state)
        .await;
    Ok(Json(bundle))
}

/// Daily forecast for a district
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<WeatherBundle>> {
    let location = validated_location(query.state, query.district)?;
    let days = query.days.unwrap_or(DEFAULT_FORECAST_DAYS);
    if !(1..=MAX_FORECAST_DAYS).contains(&days) {
        return Err(AppError::validation(
            "days",
            format!("days must be between 1 and {}", MAX_FORECAST_DAYS),
        ));
    }

    let bundle = state
        .integration
        .weather()
        .weather_forecast(&location.district, &location.state, days)
        .await;
    Ok(Json(bundle))
}
