use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Price of one tez at a given block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub btc: f64,
    pub eur: f64,
    pub usd: f64,
    pub cny: f64,
    pub jpy: f64,
    pub krw: f64,
    pub eth: f64,
    #[serde(default)]
    pub gbp: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_quote() {
        let json = r#"{"level": 1500000, "timestamp": "2021-05-30T10:11:12Z",
            "btc": 0.0001, "eur": 3.1, "usd": 3.8, "cny": 24.3, "jpy": 417.0,
            "krw": 4233.5, "eth": 0.0016}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.usd, 3.8);
        assert_eq!(quote.gbp, None);
        assert!(quote.timestamp.is_some());
    }
}
