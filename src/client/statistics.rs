use super::{Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::types::{QuoteCurrency, Statistics};

const STATISTICS_FILTERS: &[&str] = &["level", "timestamp", "sort", "offset", "limit"];
const DAILY_FILTERS: &[&str] = &["date", "sort", "offset", "limit"];
const CYCLIC_FILTERS: &[&str] = &["cycle", "sort", "offset", "limit"];

impl TzktClient {
    /// Supply statistics at the end of each block.
    pub async fn statistics(&self, filters: &Filters, quote: &[QuoteCurrency]) -> Result<Vec<Statistics>> {
        let query = Query::filtered(filters, STATISTICS_FILTERS)?.quote(quote);
        self.get_json("statistics", query).await
    }

    /// Supply statistics at the end of each day.
    pub async fn daily_statistics(
        &self,
        filters: &Filters,
        quote: &[QuoteCurrency],
    ) -> Result<Vec<Statistics>> {
        let query = Query::filtered(filters, DAILY_FILTERS)?.quote(quote);
        self.get_json("statistics/daily", query).await
    }

    /// Supply statistics at the end of each cycle.
    pub async fn cyclic_statistics(
        &self,
        filters: &Filters,
        quote: &[QuoteCurrency],
    ) -> Result<Vec<Statistics>> {
        let query = Query::filtered(filters, CYCLIC_FILTERS)?.quote(quote);
        self.get_json("statistics/cyclic", query).await
    }

    pub async fn current_statistics(&self, quote: &[QuoteCurrency]) -> Result<Statistics> {
        self.get_json("statistics/current", Query::new().quote(quote))
            .await
    }
}
