//! IMD (India Meteorological Department) weather API client

use reqwest::Client;
use shared::WeatherBundle;

use super::{endpoint, fetch_json, ExternalError};

const UPSTREAM: &str = "IMD";

/// IMD weather API client
#[derive(Clone)]
pub struct ImdClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ImdClient {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetch current conditions for a district
    pub async fn current_weather(
        &self,
        district: &str,
        state: &str,
    ) -> Result<WeatherBundle, ExternalError> {
        let url = endpoint(UPSTREAM, &self.base_url, &["weather", "current"])?;
        let request = self
            .client
            .get(url)
            .query(&[("district", district), ("state", state)]);

        fetch_json(UPSTREAM, self.authorize(request)).await
    }

    /// Fetch a `days`-long daily forecast for a district
    pub async fn forecast(
        &self,
        district: &str,
        state: &str,
        days: u32,
    ) -> Result<WeatherBundle, ExternalError> {
        let url = endpoint(UPSTREAM, &self.base_url, &["weather", "forecast"])?;
        let days = days.to_string();
        let request = self.client.get(url).query(&[
            ("district", district),
            ("state", state),
            ("days", days.as_str()),
        ]);

        fetch_json(UPSTREAM, self.authorize(request)).await
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.is_empty() {
            request
        } else {
            request.bearer_auth(&self.api_key)
        }
    }
}
