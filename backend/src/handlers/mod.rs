//! HTTP handlers

pub mod auth;
pub mod health;
pub mod integrated;
pub mod market;
pub mod research;
pub mod weather;

pub use auth::{current_session, login, logout};
pub use health::{health_check, root};
pub use integrated::{get_integrated_data, submit_farmer_report};
pub use market::{get_enam_prices, get_market_analytics, get_market_prices};
pub use research::{get_crop_varieties, get_kvk_data, get_research_publications};
pub use weather::{get_current_weather, get_weather_forecast};

use shared::Location;
use validator::Validate;

use crate::error::AppResult;

/// Location from optional query values, trimmed and checked for blanks
pub(crate) fn validated_location(
    state: Option<String>,
    district: Option<String>,
) -> AppResult<Location> {
    let location = Location::new(state.unwrap_or_default(), district.unwrap_or_default()).normalized();
    location.validate()?;
    Ok(location)
}
