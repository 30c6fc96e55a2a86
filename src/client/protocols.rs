use serde_json::Value;

use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::{Filters, PAGINATION_FIELDS};
use crate::types::Protocol;

impl TzktClient {
    pub async fn protocols(&self, filters: &Filters) -> Result<Vec<Protocol>> {
        let query = Query::filtered(filters, PAGINATION_FIELDS)?;
        self.get_json("protocols", query).await
    }

    pub async fn protocol_count(&self) -> Result<u64> {
        self.get_count("protocols/count", Query::new()).await
    }

    pub async fn protocol_by_code(&self, code: i64) -> Result<Protocol> {
        self.get_json(Path::new("protocols").arg(code), Query::new())
            .await
    }

    pub async fn protocol_by_hash(&self, hash: &str) -> Result<Protocol> {
        self.get_json(Path::new("protocols").arg(hash), Query::new())
            .await
    }

    /// Protocol active during `cycle`.
    pub async fn protocol_by_cycle(&self, cycle: i64) -> Result<Protocol> {
        self.get_json(Path::new("protocols/cycles").arg(cycle), Query::new())
            .await
    }

    pub async fn current_protocol(&self) -> Result<Protocol> {
        self.get_json("protocols/current", Query::new()).await
    }

    pub async fn protocol_suggestions(&self, query: &str) -> Result<Vec<Value>> {
        self.get_json(Path::new("suggest/protocols").arg(query), Query::new())
            .await
    }
}
