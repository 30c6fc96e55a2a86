//! Response models and request options for the tzKT API.
//!
//! Field names follow the Rust convention; serde maps them to the API's camelCase.

use serde::{Deserialize, Serialize};

mod accounts;
mod balances;
mod bigmaps;
mod blocks;
mod commitments;
mod contracts;
mod cycles;
mod delegates;
mod head;
mod home;
mod operations;
mod protocols;
mod quotes;
mod rewards;
mod rights;
mod software;
mod statistics;
pub mod timestamp;
mod voting;

pub use accounts::*;
pub use balances::*;
pub use bigmaps::*;
pub use blocks::*;
pub use commitments::*;
pub use contracts::*;
pub use cycles::*;
pub use delegates::*;
pub use head::*;
pub use home::*;
pub use operations::*;
pub use protocols::*;
pub use quotes::*;
pub use rewards::*;
pub use rights::*;
pub use software::*;
pub use statistics::*;
pub use voting::*;

/// Reference to an account: its address and, when known, its public alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    #[serde(default)]
    pub alias: Option<String>,
    pub address: String,
}

/// Fiat and crypto prices of one tez, injected when a `quote` option is requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteShort {
    pub btc: Option<f64>,
    pub eur: Option<f64>,
    pub usd: Option<f64>,
    pub cny: Option<f64>,
    pub jpy: Option<f64>,
    pub krw: Option<f64>,
    pub eth: Option<f64>,
    pub gbp: Option<f64>,
}

/// Currencies accepted by the `quote` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteCurrency {
    Btc,
    Eur,
    Usd,
    Cny,
    Jpy,
    Krw,
    Eth,
    Gbp,
}

impl QuoteCurrency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btc => "btc",
            Self::Eur => "eur",
            Self::Usd => "usd",
            Self::Cny => "cny",
            Self::Jpy => "jpy",
            Self::Krw => "krw",
            Self::Eth => "eth",
            Self::Gbp => "gbp",
        }
    }

    /// Renders a `quote` parameter value, or `None` for an empty selection.
    pub fn join(currencies: &[QuoteCurrency]) -> Option<String> {
        if currencies.is_empty() {
            return None;
        }
        Some(
            currencies
                .iter()
                .map(QuoteCurrency::as_str)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

/// Format of Micheline parameters, storage and diffs in responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MichelineFormat {
    #[default]
    Json,
    JsonString,
    Raw,
    RawString,
}

impl MichelineFormat {
    pub fn as_param(&self) -> u8 {
        match self {
            Self::Json => 0,
            Self::JsonString => 1,
            Self::Raw => 2,
            Self::RawString => 3,
        }
    }
}

/// Manager operation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    Applied,
    Failed,
    Backtracked,
    Skipped,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_currencies_join() {
        assert_eq!(QuoteCurrency::join(&[]), None);
        assert_eq!(
            QuoteCurrency::join(&[QuoteCurrency::Usd, QuoteCurrency::Btc]).as_deref(),
            Some("usd,btc")
        );
    }

    #[test]
    fn alias_without_name() {
        let alias: Alias = serde_json::from_str(r#"{"address": "tz1abc"}"#).unwrap();
        assert_eq!(alias.alias, None);
        assert_eq!(alias.address, "tz1abc");
    }

    #[test]
    fn unknown_status_does_not_fail() {
        let status: OperationStatus = serde_json::from_str(r#""pending""#).unwrap();
        assert_eq!(status, OperationStatus::Unknown);
    }

    #[test]
    fn micheline_format_params() {
        assert_eq!(MichelineFormat::default().as_param(), 0);
        assert_eq!(MichelineFormat::RawString.as_param(), 3);
    }
}
