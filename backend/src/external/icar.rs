//! ICAR research and KVK extension API client

use reqwest::Client;
use shared::{KvkExtensionBundle, Publication, ResearchRecord};

use super::{endpoint, fetch_json, ExternalError};

const ICAR: &str = "ICAR";
const KVK: &str = "KVK";

#[derive(Clone)]
pub struct IcarClient {
    client: Client,
    base_url: String,
    kvk_url: String,
}

impl IcarClient {
    pub fn new(client: Client, base_url: impl Into<String>, kvk_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            kvk_url: kvk_url.into(),
        }
    }

    /// Released varieties of a crop
    pub async fn varieties(&self, crop: &str) -> Result<Vec<ResearchRecord>, ExternalError> {
        let url = endpoint(ICAR, &self.base_url, &["varieties", crop])?;
        fetch_json(ICAR, self.client.get(url)).await
    }

    /// The KVK serving a district
    pub async fn kvk_center(
        &self,
        district: &str,
        state: &str,
    ) -> Result<KvkExtensionBundle, ExternalError> {
        let url = endpoint(KVK, &self.kvk_url, &["centers"])?;
        let request = self
            .client
            .get(url)
            .query(&[("district", district), ("state", state)]);
        fetch_json(KVK, request).await
    }

    /// Research publications about a crop, optionally for one year
    pub async fn publications(
        &self,
        crop: &str,
        year: Option<i32>,
    ) -> Result<Vec<Publication>, ExternalError> {
        let url = endpoint(ICAR, &self.base_url, &["publications"])?;
        let year = year.map(|y| y.to_string());

        let mut params: Vec<(&str, &str)> = vec![("crop", crop)];
        if let Some(year) = year.as_deref() {
            params.push(("year", year));
        }

        fetch_json(ICAR, self.client.get(url).query(&params)).await
    }
}
