use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{QuoteCurrency, QuoteShort, timestamp};
use crate::query_helpers::ParameterError;
use crate::token_helpers::Mutez;

/// One point of an account's balance history. Only changes are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceHistoryEntry {
    pub level: i64,
    #[serde(default, with = "timestamp::option")]
    pub timestamp: Option<DateTime<Utc>>,
    pub balance: Mutez,
    pub quote: Option<QuoteShort>,
}

/// Cell separator of a CSV balance report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReportDelimiter {
    #[default]
    Comma,
    Semicolon,
}

impl ReportDelimiter {
    /// Value of the `delimiter` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
        }
    }

    /// Character separating cells in the report body.
    pub fn as_char(&self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
        }
    }
}

impl FromStr for ReportDelimiter {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comma" => Ok(Self::Comma),
            "semicolon" => Ok(Self::Semicolon),
            other => Err(ParameterError::InvalidDelimiter(other.to_string())),
        }
    }
}

/// Options of `/v1/accounts/{address}/report`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceReportOptions {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub delimiter: ReportDelimiter,
    /// Use the price at each operation instead of the current price.
    pub historical: bool,
    pub currency: Option<QuoteCurrency>,
}

/// Splits a CSV report into rows of cells, stopping at the first blank line.
pub fn parse_report(body: &str, delimiter: ReportDelimiter) -> Vec<Vec<String>> {
    body.lines()
        .map(|line| line.trim_end_matches('\r'))
        .take_while(|line| !line.is_empty())
        .map(|line| {
            line.split(delimiter.as_char())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_from_str() {
        assert_eq!("comma".parse::<ReportDelimiter>(), Ok(ReportDelimiter::Comma));
        assert_eq!(
            "semicolon".parse::<ReportDelimiter>(),
            Ok(ReportDelimiter::Semicolon)
        );
        assert_eq!(
            "tab".parse::<ReportDelimiter>(),
            Err(ParameterError::InvalidDelimiter("tab".into()))
        );
    }

    #[test]
    fn report_rows_stop_at_blank_line() {
        let body = "Block level;Datetime;Received\r\n1;2020-01-01;5\r\n\r\ntrailing;junk\n";
        let rows = parse_report(body, ReportDelimiter::Semicolon);
        assert_eq!(
            rows,
            vec![
                vec!["Block level", "Datetime", "Received"],
                vec!["1", "2020-01-01", "5"],
            ]
        );
    }

    #[test]
    fn history_entry_with_quote() {
        let json = r#"{"level": 5, "timestamp": "2020-01-01T00:00:00Z", "balance": 12, "quote": {"usd": 1.5}}"#;
        let entry: BalanceHistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.balance, Mutez(12));
        assert_eq!(entry.quote.unwrap().usd, Some(1.5));
    }
}
