//! HTTP handlers for research and extension endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{
    validate_commodity_name, validate_publication_year, KvkExtensionBundle, Publication,
    ResearchRecord,
};

use super::validated_location;
use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct KvkQuery {
    pub state: Option<String>,
    pub district: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PublicationQuery {
    pub crop: Option<String>,
    pub year: Option<i32>,
}

fn checked_crop(crop: &str) -> AppResult<&str> {
    validate_commodity_name(crop).map_err(|msg| AppError::validation("crop", msg))?;
    Ok(crop.trim())
}

/// Released varieties of a crop
pub async fn get_crop_varieties(
    State(state): State<AppState>,
    Path(crop): Path<String>,
) -> AppResult<Json<Vec<ResearchRecord>>> {
    let crop = checked_crop(&crop)?;
    let records = state.integration.research().crop_varieties(crop).await;
    Ok(Json(records))
}

/// KVK center, programs and advisories for a district
pub async fn get_kvk_data(
    State(state): State<AppState>,
    Query(query): Query<KvkQuery>,
) -> AppResult<Json<KvkExtensionBundle>> {
    let location = validated_location(query.state, query.district)?;
    let bundle = state
        .integration
        .research()
        .kvk_data(&location.district, &location.state)
        .await;
    Ok(Json(bundle))
}

/// Research publications for a crop
pub async fn get_research_publications(
    State(state): State<AppState>,
    Query(query): Query<PublicationQuery>,
) -> AppResult<Json<Vec<Publication>>> {
    let crop = checked_crop(query.crop.as_deref().unwrap_or_default())?;
    if let Some(year) = query.year {
        validate_publication_year(year).map_err(|msg| AppError::validation("year", msg))?;
    }

    let publications = state
        .integration
        .research()
        .research_publications(crop, query.year)
        .await;
    Ok(Json(publications))
}
