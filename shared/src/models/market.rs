//! Market price models (Agmarknet / eNAM contract)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One commodity quote from one market on one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketPriceRecord {
    pub commodity: String,
    pub variety: String,
    pub market: Market,
    pub prices: PriceQuote,
    pub date: NaiveDate,
    /// Quantity arrived at the market
    pub arrivals: u32,
    pub trend: PriceTrend,
    /// Percentage change from the previous day
    pub price_change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub name: String,
    pub state: String,
    pub district: String,
    #[serde(rename = "type")]
    pub market_type: MarketType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarketType {
    Mandi,
    Enam,
    Wholesale,
    Retail,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub modal: Decimal,
    pub minimum: Decimal,
    pub maximum: Decimal,
    pub currency: Currency,
    pub unit: PriceUnit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "INR")]
    Inr,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    Quintal,
    Kg,
    Ton,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}

impl PriceTrend {
    pub const ALL: [PriceTrend; 3] = [PriceTrend::Up, PriceTrend::Down, PriceTrend::Stable];
}

/// Aggregate price statistics and forecasts for a commodity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalytics {
    pub commodity: String,
    pub avg_price: Decimal,
    pub volatility_index: f64,
    pub seasonal_trend: Vec<SeasonalPoint>,
    pub price_forecasts: Vec<PriceForecast>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalPoint {
    pub month: String,
    pub avg_price: Decimal,
    pub volume: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceForecast {
    pub date: NaiveDate,
    pub predicted_price: Decimal,
    /// 0.0 - 1.0
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(modal: i64) -> MarketPriceRecord {
        MarketPriceRecord {
            commodity: "rice".into(),
            variety: "Common".into(),
            market: Market {
                name: "Azadpur Mandi".into(),
                state: "Delhi".into(),
                district: "Delhi".into(),
                market_type: MarketType::Mandi,
            },
            prices: PriceQuote {
                modal: Decimal::from(modal),
                minimum: Decimal::from(modal - 500),
                maximum: Decimal::from(modal + 500),
                currency: Currency::Inr,
                unit: PriceUnit::Quintal,
            },
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            arrivals: 120,
            trend: PriceTrend::Stable,
            price_change: 0.0,
        }
    }

    #[test]
    fn test_market_type_serializes_as_type_key() {
        let json = serde_json::to_value(record(2800)).unwrap();
        assert_eq!(json["market"]["type"], "mandi");
        assert_eq!(json["prices"]["currency"], "INR");
        assert_eq!(json["prices"]["unit"], "quintal");
        assert!(json.get("priceChange").is_some());
    }
}
