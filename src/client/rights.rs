use super::{Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::types::Right;

const RIGHT_COUNT_FILTERS: &[&str] = &[
    "type", "baker", "cycle", "level", "slots", "priority", "status",
];
const RIGHT_FILTERS: &[&str] = &[
    "type", "baker", "cycle", "level", "slots", "priority", "status", "sort", "offset", "limit",
];

impl TzktClient {
    /// Baking and endorsing rights, past and future.
    pub async fn rights(&self, filters: &Filters) -> Result<Vec<Right>> {
        let query = Query::filtered(filters, RIGHT_FILTERS)?;
        self.get_json("rights", query).await
    }

    pub async fn right_count(&self, filters: &Filters) -> Result<u64> {
        let query = Query::filtered(filters, RIGHT_COUNT_FILTERS)?;
        self.get_count("rights/count", query).await
    }
}
