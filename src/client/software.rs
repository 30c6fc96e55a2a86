use super::{Query, Result, TzktClient};
use crate::query_helpers::{Filters, PAGINATION_FIELDS};
use crate::types::Software;

impl TzktClient {
    pub async fn software(&self, filters: &Filters) -> Result<Vec<Software>> {
        let query = Query::filtered(filters, PAGINATION_FIELDS)?;
        self.get_json("software", query).await
    }

    pub async fn software_count(&self) -> Result<u64> {
        self.get_count("software/count", Query::new()).await
    }
}
