use super::{Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::types::Quote;

const QUOTE_FILTERS: &[&str] = &["level", "timestamp", "sort", "offset", "limit"];

impl TzktClient {
    pub async fn last_quote(&self) -> Result<Quote> {
        self.get_json("quotes/last", Query::new()).await
    }

    /// Quotes aligned with blocks.
    pub async fn quotes(&self, filters: &Filters) -> Result<Vec<Quote>> {
        let query = Query::filtered(filters, QUOTE_FILTERS)?;
        self.get_json("quotes", query).await
    }

    pub async fn quote_count(&self) -> Result<u64> {
        self.get_count("quotes/count", Query::new()).await
    }
}
