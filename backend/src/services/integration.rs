//! Aggregation of the three upstream adapters into one bundle

use std::sync::Arc;

use chrono::Utc;
use shared::{FarmerReport, FarmerReportInput, IntegratedBundle, Location, RoleView};
use validator::Validate;

use super::market::MarketService;
use super::projection::project;
use super::report::ReportService;
use super::research::ResearchService;
use super::synthetic::SyntheticRng;
use super::weather::WeatherService;
use crate::config::UpstreamConfig;
use crate::error::{AppError, AppResult};
use crate::external::{AgmarknetClient, IcarClient, ImdClient};

/// Commodity and crop quoted in every integrated bundle
pub const DEFAULT_COMMODITY: &str = "rice";

#[derive(Clone)]
pub struct DataIntegrationService {
    weather: WeatherService,
    market: MarketService,
    research: ResearchService,
    reports: Arc<ReportService>,
}

impl DataIntegrationService {
    pub fn new(
        weather: WeatherService,
        market: MarketService,
        research: ResearchService,
        reports: Arc<ReportService>,
    ) -> Self {
        Self {
            weather,
            market,
            research,
            reports,
        }
    }

    /// Wire every adapter to its configured upstream, sharing one HTTP client
    /// and one synthetic generator
    pub fn from_upstream(
        http: reqwest::Client,
        upstream: &UpstreamConfig,
        rng: Arc<SyntheticRng>,
    ) -> Self {
        let imd = ImdClient::new(http.clone(), &upstream.imd_url, &upstream.imd_api_key);
        let agmarknet = AgmarknetClient::new(http.clone(), &upstream.agmarknet_url, &upstream.enam_url);
        let icar = IcarClient::new(http, &upstream.icar_url, &upstream.kvk_url);

        Self::new(
            WeatherService::new(imd, rng.clone()),
            MarketService::new(agmarknet, rng.clone()),
            ResearchService::new(icar),
            Arc::new(ReportService::new(rng)),
        )
    }

    pub fn weather(&self) -> &WeatherService {
        &self.weather
    }

    pub fn market(&self) -> &MarketService {
        &self.market
    }

    pub fn research(&self) -> &ResearchService {
        &self.research
    }

    /// Weather, rice prices, rice varieties and KVK data for one location,
    /// fetched concurrently. Adapters never fail; only an invalid location does.
    pub async fn get_integrated_farm_data(&self, location: &Location) -> AppResult<IntegratedBundle> {
        let location = location.clone().normalized();
        if let Err(errors) = location.validate() {
            tracing::error!("Rejected integrated data request: {}", errors);
            return Err(AppError::IntegratedDataUnavailable);
        }

        let state = location.state.as_str();
        let district = location.district.as_str();

        let (weather, market, research, extension) = tokio::join!(
            self.weather.current_weather(district, state),
            self.market
                .market_prices(DEFAULT_COMMODITY, Some(state), Some(district)),
            self.research.crop_varieties(DEFAULT_COMMODITY),
            self.research.kvk_data(district, state),
        );

        tracing::debug!(
            "Integrated bundle for {}/{}: {} prices, {} varieties",
            state,
            district,
            market.len(),
            research.len()
        );

        Ok(IntegratedBundle {
            weather,
            market,
            research,
            extension,
            last_updated: Utc::now(),
        })
    }

    /// Integrated bundle plus the insight block for `role`
    pub async fn get_dashboard_analytics(&self, role: &str, location: &Location) -> AppResult<RoleView> {
        let bundle = self.get_integrated_farm_data(location).await?;
        Ok(project(role, bundle))
    }

    pub fn process_farmer_report(&self, input: FarmerReportInput) -> AppResult<FarmerReport> {
        self.reports.process_farmer_report(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline() -> DataIntegrationService {
        let upstream = UpstreamConfig {
            imd_url: "http://127.0.0.1:1".into(),
            imd_api_key: String::new(),
            agmarknet_url: "http://127.0.0.1:1".into(),
            enam_url: "http://127.0.0.1:1".into(),
            icar_url: "http://127.0.0.1:1".into(),
            kvk_url: "http://127.0.0.1:1".into(),
        };
        DataIntegrationService::from_upstream(
            reqwest::Client::new(),
            &upstream,
            Arc::new(SyntheticRng::seeded(5)),
        )
    }

    #[tokio::test]
    async fn test_bundle_from_synthetic_sources() {
        let before = Utc::now();
        let bundle = offline()
            .get_integrated_farm_data(&Location::new("Punjab", "Ludhiana"))
            .await
            .unwrap();
        let after = Utc::now();

        assert_eq!(bundle.weather.location.district, "Ludhiana");
        assert_eq!(bundle.market.len(), 4);
        assert!(bundle.market.iter().all(|r| r.commodity == DEFAULT_COMMODITY));
        assert_eq!(bundle.research[0].crop_variety.name, "rice Variety 1");
        assert_eq!(bundle.extension.kvk_center.name, "KVK Ludhiana");
        assert!(bundle.last_updated >= before);
        assert!(bundle.last_updated <= after);
    }

    #[tokio::test]
    async fn test_blank_location_is_unavailable() {
        let err = offline()
            .get_integrated_farm_data(&Location::new(" ", "Pune"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::IntegratedDataUnavailable));
    }
}
