use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::types::{Block, QuoteCurrency};

const BLOCK_FILTERS: &[&str] = &[
    "baker", "level", "timestamp", "priority", "sort", "offset", "limit",
];

impl TzktClient {
    pub async fn blocks(&self, filters: &Filters, quote: &[QuoteCurrency]) -> Result<Vec<Block>> {
        let query = Query::filtered(filters, BLOCK_FILTERS)?.quote(quote);
        self.get_json("blocks", query).await
    }

    /// With `operations`, the block's operation lists are included.
    pub async fn block_by_hash(&self, hash: &str, operations: bool) -> Result<Block> {
        let query = Query::new().param_opt("operations", operations.then_some(true));
        self.get_json(Path::new("blocks").arg(hash), query).await
    }

    pub async fn block_by_level(&self, level: i64, operations: bool) -> Result<Block> {
        let query = Query::new().param_opt("operations", operations.then_some(true));
        self.get_json(Path::new("blocks").arg(level), query).await
    }

    pub async fn block_count(&self) -> Result<u64> {
        self.get_count("blocks/count", Query::new()).await
    }
}
