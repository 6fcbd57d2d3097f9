//! Weather data models (IMD contract)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Coordinates;

/// Current conditions plus a daily forecast and active alerts for a district
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherBundle {
    pub location: WeatherLocation,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
    pub alerts: Vec<WeatherAlert>,
}

/// Station location as reported by the weather source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherLocation {
    pub state: String,
    pub district: String,
    pub block: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Millimetres
    pub rainfall: f64,
    /// km/h
    pub wind_speed: f64,
    /// hPa
    pub pressure: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub rainfall: f64,
    pub humidity: f64,
    pub conditions: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    #[serde(rename = "type")]
    pub alert_type: WeatherAlertType,
    pub severity: AlertSeverity,
    pub message: String,
    pub valid_until: DateTime<Utc>,
}

/// Types of weather alerts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherAlertType {
    Cyclone,
    HeavyRain,
    Drought,
    Heatwave,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Extreme,
}

/// Sky condition labels used by the forecast
pub const FORECAST_CONDITIONS: [&str; 4] = ["sunny", "cloudy", "rainy", "partly_cloudy"];
