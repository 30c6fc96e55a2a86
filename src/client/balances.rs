use chrono::{DateTime, Utc};

use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::token_helpers::Mutez;
use crate::types::{
    BalanceHistoryEntry, BalanceReportOptions, QuoteCurrency, parse_report, timestamp,
};

const HISTORY_FILTERS: &[&str] = &["step", "sort", "offset", "limit"];

impl TzktClient {
    /// Balance changes of `address`. `step` thins the series to every n-th block.
    pub async fn balance_history(
        &self,
        address: &str,
        filters: &Filters,
        quote: &[QuoteCurrency],
    ) -> Result<Vec<BalanceHistoryEntry>> {
        let query = Query::filtered(filters, HISTORY_FILTERS)?.quote(quote);
        self.get_json(Path::new("accounts").arg(address).then("balance_history"), query)
            .await
    }

    pub async fn balance_at_level(&self, address: &str, level: i64) -> Result<Mutez> {
        let path = Path::new("accounts").arg(address).then("balance_history").arg(level);
        self.get_integer(path, Query::new()).await.map(Mutez)
    }

    pub async fn balance_at_date(&self, address: &str, date: DateTime<Utc>) -> Result<Mutez> {
        let path = Path::new("accounts")
            .arg(address)
            .then("balance_history")
            .arg(timestamp::format(&date));
        self.get_integer(path, Query::new()).await.map(Mutez)
    }

    /// Fetches the CSV account statement and splits it into rows of cells.
    ///
    /// Parsing stops at the first empty line.
    pub async fn balance_report(
        &self,
        address: &str,
        options: &BalanceReportOptions,
    ) -> Result<Vec<Vec<String>>> {
        let query = Query::new()
            .param("delimiter", options.delimiter.as_param())
            .param_opt("from", options.from)
            .param_opt("to", options.to)
            .param_opt("historical", options.historical.then_some(true))
            .param_opt("currency", options.currency.map(|c| c.as_str()));
        let body = self
            .get_text(Path::new("accounts").arg(address).then("report"), query)
            .await?;
        Ok(parse_report(&body, options.delimiter))
    }
}
