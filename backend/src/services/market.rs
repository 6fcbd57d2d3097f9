//! Market price adapter: Agmarknet and eNAM with a synthetic fallback

use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use shared::{
    Currency, Market, MarketAnalytics, MarketPriceRecord, MarketType, PriceForecast, PriceQuote,
    PriceTrend, PriceUnit, SeasonalPoint,
};

use super::fallback::fetch_or_synthesize;
use super::synthetic::{floor2, SyntheticRng};
use crate::external::AgmarknetClient;

/// Markets quoted by the synthetic price feed, in output order
const REFERENCE_MARKETS: [(&str, &str, &str, MarketType); 4] = [
    ("Azadpur Mandi", "Delhi", "Delhi", MarketType::Mandi),
    ("Vashi APMC", "Maharashtra", "Mumbai", MarketType::Wholesale),
    ("Koyambedu Market", "Tamil Nadu", "Chennai", MarketType::Wholesale),
    ("Bangalore APMC", "Karnataka", "Bangalore", MarketType::Enam),
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const FORECAST_HORIZON_DAYS: i64 = 30;

/// Price in rupees from an amount in paise
fn rupees(paise: i64) -> Decimal {
    Decimal::new(paise, 2)
}

#[derive(Clone)]
pub struct MarketService {
    client: AgmarknetClient,
    rng: Arc<SyntheticRng>,
}

impl MarketService {
    pub fn new(client: AgmarknetClient, rng: Arc<SyntheticRng>) -> Self {
        Self { client, rng }
    }

    /// Today's mandi prices for a commodity
    pub async fn market_prices(
        &self,
        commodity: &str,
        state: Option<&str>,
        district: Option<&str>,
    ) -> Vec<MarketPriceRecord> {
        let today = Utc::now().date_naive();
        fetch_or_synthesize(
            "Agmarknet prices",
            self.client.prices(commodity, state, district, today),
            || self.synthetic_prices(commodity),
        )
        .await
    }

    pub async fn enam_prices(&self, commodity: &str) -> Vec<MarketPriceRecord> {
        fetch_or_synthesize(
            "eNAM prices",
            self.client.enam_prices(commodity),
            || self.synthetic_prices(commodity),
        )
        .await
    }

    pub async fn market_analytics(&self, commodity: &str) -> MarketAnalytics {
        fetch_or_synthesize(
            "Agmarknet analytics",
            self.client.analytics(commodity),
            || self.synthetic_analytics(commodity),
        )
        .await
    }

    /// One randomized quote per reference market
    pub fn synthetic_prices(&self, commodity: &str) -> Vec<MarketPriceRecord> {
        let today = Utc::now().date_naive();

        self.rng.with(|rng| {
            REFERENCE_MARKETS
                .iter()
                .map(|&(name, state, district, market_type)| MarketPriceRecord {
                    commodity: commodity.to_string(),
                    variety: "Common".to_string(),
                    market: Market {
                        name: name.to_string(),
                        state: state.to_string(),
                        district: district.to_string(),
                        market_type,
                    },
                    prices: PriceQuote {
                        modal: rupees(rng.gen_range(250_000..350_000)),
                        minimum: rupees(rng.gen_range(200_000..250_000)),
                        maximum: rupees(rng.gen_range(300_000..350_000)),
                        currency: Currency::Inr,
                        unit: PriceUnit::Quintal,
                    },
                    date: today,
                    arrivals: rng.gen_range(100..600),
                    trend: PriceTrend::ALL[rng.gen_range(0..PriceTrend::ALL.len())],
                    price_change: floor2(rng.gen_range(-5.0..5.0)),
                })
                .collect()
        })
    }

    /// Fixed headline figures with a randomized seasonal curve and 30-day forecast
    pub fn synthetic_analytics(&self, commodity: &str) -> MarketAnalytics {
        let today = Utc::now().date_naive();

        let (seasonal_trend, price_forecasts) = self.rng.with(|rng| {
            let seasonal = MONTHS
                .iter()
                .map(|month| SeasonalPoint {
                    month: month.to_string(),
                    avg_price: rupees(rng.gen_range(250_000..330_000)),
                    volume: floor2(rng.gen_range(1000.0..3000.0)),
                })
                .collect();
            let forecasts = (0..FORECAST_HORIZON_DAYS)
                .map(|offset| PriceForecast {
                    date: today + Duration::days(offset),
                    predicted_price: rupees(rng.gen_range(255_000..295_000)),
                    confidence: floor2(rng.gen_range(0.70..0.95)),
                })
                .collect();
            (seasonal, forecasts)
        });

        MarketAnalytics {
            commodity: commodity.to_string(),
            avg_price: Decimal::from(2750),
            volatility_index: 15.2,
            seasonal_trend,
            price_forecasts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MarketService {
        let client = AgmarknetClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1",
            "http://127.0.0.1:1",
        );
        MarketService::new(client, Arc::new(SyntheticRng::seeded(11)))
    }

    #[test]
    fn test_synthetic_prices_cover_reference_markets_in_order() {
        let records = service().synthetic_prices("wheat");
        let names: Vec<&str> = records.iter().map(|r| r.market.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Azadpur Mandi", "Vashi APMC", "Koyambedu Market", "Bangalore APMC"]
        );
        assert_eq!(records[3].market.market_type, MarketType::Enam);
        assert!(records.iter().all(|r| r.commodity == "wheat" && r.variety == "Common"));
    }

    #[test]
    fn test_synthetic_price_ranges() {
        let service = service();
        for _ in 0..25 {
            for record in service.synthetic_prices("rice") {
                assert!(record.prices.modal >= Decimal::from(2500));
                assert!(record.prices.modal < Decimal::from(3500));
                assert!(record.prices.minimum >= Decimal::from(2000));
                assert!(record.prices.minimum < Decimal::from(2500));
                assert!(record.prices.maximum >= Decimal::from(3000));
                assert!(record.prices.maximum < Decimal::from(3500));
                assert!((100..600).contains(&record.arrivals));
                assert!((-5.0..5.0).contains(&record.price_change));
                assert_eq!(record.prices.unit, PriceUnit::Quintal);
            }
        }
    }

    #[test]
    fn test_synthetic_analytics_shape() {
        let analytics = service().synthetic_analytics("rice");
        assert_eq!(analytics.avg_price, Decimal::from(2750));
        assert_eq!(analytics.volatility_index, 15.2);
        assert_eq!(analytics.seasonal_trend.len(), 12);
        assert_eq!(analytics.seasonal_trend[0].month, "Jan");
        assert_eq!(analytics.seasonal_trend[11].month, "Dec");
        assert_eq!(analytics.price_forecasts.len(), 30);
        assert_eq!(analytics.price_forecasts[0].date, Utc::now().date_naive());

        for point in &analytics.price_forecasts {
            assert!(point.predicted_price >= Decimal::from(2550));
            assert!(point.predicted_price < Decimal::from(2950));
            assert!((0.70..0.95).contains(&point.confidence));
        }
    }

    #[tokio::test]
    async fn test_unreachable_upstream_yields_synthetic_prices() {
        let records = service().market_prices("rice", Some("Punjab"), None).await;
        assert_eq!(records.len(), 4);
    }
}
