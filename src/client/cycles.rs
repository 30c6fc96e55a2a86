use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::types::{Cycle, QuoteCurrency};

const CYCLE_FILTERS: &[&str] = &["snapshotIndex", "sort", "offset", "limit"];

impl TzktClient {
    pub async fn cycles(&self, filters: &Filters, quote: &[QuoteCurrency]) -> Result<Vec<Cycle>> {
        let query = Query::filtered(filters, CYCLE_FILTERS)?.quote(quote);
        self.get_json("cycles", query).await
    }

    pub async fn cycle(&self, index: i64, quote: &[QuoteCurrency]) -> Result<Cycle> {
        self.get_json(Path::new("cycles").arg(index), Query::new().quote(quote))
            .await
    }

    pub async fn cycle_count(&self) -> Result<u64> {
        self.get_count("cycles/count", Query::new()).await
    }
}
