//! Weather adapter: IMD data with a synthetic fallback

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use shared::{
    AlertSeverity, Coordinates, CurrentConditions, DailyForecast, WeatherAlert, WeatherAlertType,
    WeatherBundle, WeatherLocation, FORECAST_CONDITIONS,
};

use super::fallback::fetch_or_synthesize;
use super::synthetic::{floor2, SyntheticRng};
use crate::external::ImdClient;

/// Forecast length used for current-weather requests and when `days` is omitted
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

/// Weather service for current conditions and forecasts
#[derive(Clone)]
pub struct WeatherService {
    client: ImdClient,
    rng: Arc<SyntheticRng>,
}

impl WeatherService {
    pub fn new(client: ImdClient, rng: Arc<SyntheticRng>) -> Self {
        Self { client, rng }
    }

    /// Current conditions for a district; never fails
    pub async fn current_weather(&self, district: &str, state: &str) -> WeatherBundle {
        fetch_or_synthesize(
            "IMD current weather",
            self.client.current_weather(district, state),
            || self.synthetic_weather(district, state, DEFAULT_FORECAST_DAYS),
        )
        .await
    }

    /// Daily forecast for a district; never fails
    pub async fn weather_forecast(&self, district: &str, state: &str, days: u32) -> WeatherBundle {
        fetch_or_synthesize(
            "IMD forecast",
            self.client.forecast(district, state, days),
            || self.synthetic_weather(district, state, days),
        )
        .await
    }

    /// Fixed current conditions, `days` randomized daily forecasts starting
    /// today and a single heavy-rain alert valid for 48 hours
    pub fn synthetic_weather(&self, district: &str, state: &str, days: u32) -> WeatherBundle {
        let now = Utc::now();
        let today = now.date_naive();

        let forecast = self.rng.with(|rng| {
            (0..days)
                .map(|offset| DailyForecast {
                    date: today + Duration::days(i64::from(offset)),
                    min_temp: floor2(rng.gen_range(22.0..27.0)),
                    max_temp: floor2(rng.gen_range(30.0..38.0)),
                    rainfall: floor2(rng.gen_range(0.0..10.0)),
                    humidity: floor2(rng.gen_range(60.0..80.0)),
                    conditions: FORECAST_CONDITIONS[rng.gen_range(0..FORECAST_CONDITIONS.len())]
                        .to_string(),
                })
                .collect()
        });

        WeatherBundle {
            location: WeatherLocation {
                state: state.to_string(),
                district: district.to_string(),
                block: "Sample Block".to_string(),
                // Delhi
                coordinates: Coordinates::new(77.209, 28.6139),
            },
            current: CurrentConditions {
                temperature: 28.5,
                humidity: 65.0,
                rainfall: 2.3,
                wind_speed: 12.5,
                pressure: 1013.2,
                timestamp: now,
            },
            forecast,
            alerts: vec![WeatherAlert {
                alert_type: WeatherAlertType::HeavyRain,
                severity: AlertSeverity::Medium,
                message: "Heavy rainfall expected in the next 48 hours".to_string(),
                valid_until: now + Duration::hours(48),
            }],
        }
    }
}
