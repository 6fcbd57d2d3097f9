//! HTTP handlers for market price endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{validate_commodity_name, MarketAnalytics, MarketPriceRecord};

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub commodity: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
}

fn checked_commodity(commodity: &str) -> AppResult<&str> {
    validate_commodity_name(commodity).map_err(|msg| AppError::validation("commodity", msg))?;
    Ok(commodity.trim())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Mandi prices for a commodity, optionally scoped to a state and district
pub async fn get_market_prices(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> AppResult<Json<Vec<MarketPriceRecord>>> {
    let commodity = checked_commodity(query.commodity.as_deref().unwrap_or_default())?;
    let records = state
        .integration
        .market()
        .market_prices(commodity, non_blank(&query.state), non_blank(&query.district))
        .await;
    Ok(Json(records))
}

/// eNAM prices for a commodity
pub async fn get_enam_prices(
    State(state): State<AppState>,
    Path(commodity): Path<String>,
) -> AppResult<Json<Vec<MarketPriceRecord>>> {
    let commodity = checked_commodity(&commodity)?;
    let records = state.integration.market().enam_prices(commodity).await;
    Ok(Json(records))
}

/// Seasonal trend and price forecast for a commodity
pub async fn get_market_analytics(
    State(state): State<AppState>,
    Path(commodity): Path<String>,
) -> AppResult<Json<MarketAnalytics>> {
    let commodity = checked_commodity(&commodity)?;
    let analytics = state.integration.market().market_analytics(commodity).await;
    Ok(Json(analytics))
}
