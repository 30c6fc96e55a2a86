use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::types::Delegate;

const DELEGATE_FILTERS: &[&str] = &["active", "lastActivity", "sort", "offset", "limit"];

impl TzktClient {
    pub async fn delegates(&self, filters: &Filters) -> Result<Vec<Delegate>> {
        let query = Query::filtered(filters, DELEGATE_FILTERS)?;
        self.get_json("delegates", query).await
    }

    /// Counts delegates, optionally only active or only deactivated ones.
    pub async fn delegate_count(&self, active: Option<bool>) -> Result<u64> {
        let query = Query::new().param_opt("active", active);
        self.get_count("delegates/count", query).await
    }

    pub async fn delegate(&self, address: &str) -> Result<Delegate> {
        self.get_json(Path::new("delegates").arg(address), Query::new())
            .await
    }
}
