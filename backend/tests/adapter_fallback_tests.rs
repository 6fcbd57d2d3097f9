//! Upstream adapter tests against mock HTTP servers
//!
//! A healthy upstream's payload is passed through untouched; a failing one
//! (error status, malformed body, refused connection) is replaced by
//! synthetic data of the same shape.

use std::sync::Arc;

use agri_intel_backend::external::{AgmarknetClient, IcarClient, ImdClient};
use agri_intel_backend::services::{MarketService, ResearchService, SyntheticRng, WeatherService};
use rust_decimal::Decimal;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rng() -> Arc<SyntheticRng> {
    Arc::new(SyntheticRng::seeded(99))
}

fn weather_service(base_url: &str, api_key: &str) -> WeatherService {
    WeatherService::new(ImdClient::new(reqwest::Client::new(), base_url, api_key), rng())
}

fn market_service(base_url: &str) -> MarketService {
    MarketService::new(
        AgmarknetClient::new(reqwest::Client::new(), base_url, base_url),
        rng(),
    )
}

fn research_service(base_url: &str) -> ResearchService {
    ResearchService::new(IcarClient::new(reqwest::Client::new(), base_url, base_url))
}

// ============================================================================
// Weather
// ============================================================================

#[tokio::test]
async fn test_weather_live_payload_passes_through() {
    let server = MockServer::start().await;

    let mut live = weather_service(&server.uri(), "").synthetic_weather("Nashik", "Maharashtra", 2);
    live.location.block = "Niphad".to_string();
    live.current.temperature = 31.0;
    live.alerts.clear();

    Mock::given(method("GET"))
        .and(path("/weather/current"))
        .and(query_param("district", "Nashik"))
        .and(query_param("state", "Maharashtra"))
        .and(header("authorization", "Bearer imd-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&live))
        .expect(1)
        .mount(&server)
        .await;

    let bundle = weather_service(&server.uri(), "imd-key")
        .current_weather("Nashik", "Maharashtra")
        .await;

    assert_eq!(bundle, live);
}

#[tokio::test]
async fn test_weather_server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let bundle = weather_service(&server.uri(), "")
        .weather_forecast("Pune", "Maharashtra", 5)
        .await;

    assert_eq!(bundle.location.block, "Sample Block");
    assert_eq!(bundle.forecast.len(), 5);
    assert_eq!(bundle.alerts.len(), 1);
}

#[tokio::test]
async fn test_weather_malformed_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/current"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let bundle = weather_service(&server.uri(), "")
        .current_weather("Pune", "Maharashtra")
        .await;

    assert_eq!(bundle.current.temperature, 28.5);
    assert_eq!(bundle.forecast.len(), 7);
}

// ============================================================================
// Market prices
// ============================================================================

#[tokio::test]
async fn test_market_prices_live_payload_passes_through() {
    let server = MockServer::start().await;

    let mut live = market_service(&server.uri()).synthetic_prices("onion");
    live.truncate(1);
    live[0].prices.modal = Decimal::new(1_850_00, 2);

    Mock::given(method("GET"))
        .and(path("/prices"))
        .and(query_param("commodity", "onion"))
        .and(query_param("state", "Maharashtra"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&live))
        .mount(&server)
        .await;

    let records = market_service(&server.uri())
        .market_prices("onion", Some("Maharashtra"), None)
        .await;

    assert_eq!(records, live);
}

#[tokio::test]
async fn test_enam_not_found_falls_back_to_reference_markets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prices/wheat"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let records = market_service(&server.uri()).enam_prices("wheat").await;

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].market.name, "Azadpur Mandi");
    assert!(records.iter().all(|r| r.commodity == "wheat"));
}

#[tokio::test]
async fn test_analytics_server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/analytics/rice"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let analytics = market_service(&server.uri()).market_analytics("rice").await;

    assert_eq!(analytics.commodity, "rice");
    assert_eq!(analytics.seasonal_trend.len(), 12);
    assert_eq!(analytics.price_forecasts.len(), 30);
}

// ============================================================================
// Research and extension
// ============================================================================

#[tokio::test]
async fn test_kvk_live_payload_passes_through() {
    let server = MockServer::start().await;

    let mut live = ResearchService::synthetic_kvk("Ludhiana", "Punjab");
    live.kvk_center.established = 1983;
    live.programs.clear();

    Mock::given(method("GET"))
        .and(path("/centers"))
        .and(query_param("district", "Ludhiana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&live))
        .mount(&server)
        .await;

    let bundle = research_service(&server.uri()).kvk_data("Ludhiana", "Punjab").await;

    assert_eq!(bundle, live);
}

#[tokio::test]
async fn test_varieties_server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/varieties/maize"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let records = research_service(&server.uri()).crop_varieties("maize").await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].crop_variety.name, "maize Variety 1");
}

#[tokio::test]
async fn test_publications_failure_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/publications"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let publications = research_service(&server.uri())
        .research_publications("rice", Some(2022))
        .await;

    assert!(publications.is_empty());
}

#[tokio::test]
async fn test_publications_year_is_forwarded() {
    let server = MockServer::start().await;
    let body = serde_json::json!([
        { "title": "Drought tolerance in upland rice", "authors": ["Dr. C. Rao"], "year": 2021 }
    ]);

    Mock::given(method("GET"))
        .and(path("/publications"))
        .and(query_param("crop", "rice"))
        .and(query_param("year", "2021"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let publications = research_service(&server.uri())
        .research_publications("rice", Some(2021))
        .await;

    assert_eq!(publications.len(), 1);
    assert_eq!(publications[0].year, 2021);
    assert!(publications[0].doi.is_none());
}

#[tokio::test]
async fn test_refused_connection_falls_back() {
    let records = research_service("http://127.0.0.1:1").crop_varieties("rice").await;
    assert_eq!(records[0].crop_variety.developed_by, "ICAR-IARI, New Delhi");
}
