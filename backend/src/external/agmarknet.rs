//! Agmarknet and eNAM market price API client

use chrono::NaiveDate;
use reqwest::Client;
use shared::{MarketAnalytics, MarketPriceRecord};

use super::{endpoint, fetch_json, ExternalError};

const AGMARKNET: &str = "Agmarknet";
const ENAM: &str = "eNAM";

/// Client for the mandi (Agmarknet) and electronic market (eNAM) price feeds
#[derive(Clone)]
pub struct AgmarknetClient {
    client: Client,
    base_url: String,
    enam_url: String,
}

impl AgmarknetClient {
    pub fn new(client: Client, base_url: impl Into<String>, enam_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            enam_url: enam_url.into(),
        }
    }

    /// Mandi prices for a commodity on a given day, optionally scoped to a state/district
    pub async fn prices(
        &self,
        commodity: &str,
        state: Option<&str>,
        district: Option<&str>,
        date: NaiveDate,
    ) -> Result<Vec<MarketPriceRecord>, ExternalError> {
        let url = endpoint(AGMARKNET, &self.base_url, &["prices"])?;
        let date = date.format("%Y-%m-%d").to_string();

        let mut params: Vec<(&str, &str)> = vec![("commodity", commodity)];
        if let Some(state) = state {
            params.push(("state", state));
        }
        if let Some(district) = district {
            params.push(("district", district));
        }
        params.push(("date", date.as_str()));

        fetch_json(AGMARKNET, self.client.get(url).query(&params)).await
    }

    /// Prices from the eNAM electronic trading platform
    pub async fn enam_prices(&self, commodity: &str) -> Result<Vec<MarketPriceRecord>, ExternalError> {
        let url = endpoint(ENAM, &self.enam_url, &["prices", commodity])?;
        fetch_json(ENAM, self.client.get(url)).await
    }

    /// Seasonal trend and short-term forecast for a commodity
    pub async fn analytics(&self, commodity: &str) -> Result<MarketAnalytics, ExternalError> {
        let url = endpoint(AGMARKNET, &self.base_url, &["analytics", commodity])?;
        fetch_json(AGMARKNET, self.client.get(url)).await
    }
}
