//! Aggregates behind the tzkt.io front page. Shapes change often, so most are left untyped.

use serde_json::Value;

use super::{Query, Result, TzktClient};
use crate::types::{Asset, QuoteCurrency};

impl TzktClient {
    /// Network overview with financial values in `quote`.
    pub async fn home_summary(&self, quote: QuoteCurrency) -> Result<Value> {
        self.get_json("home", Query::new().param("quote", quote.as_str()))
            .await
    }

    pub async fn home_blocks(&self) -> Result<Value> {
        self.get_json("home/blocks", Query::new()).await
    }

    /// Contracts with the most activity.
    pub async fn top_assets(&self) -> Result<Vec<Asset>> {
        self.get_json("home/assets", Query::new()).await
    }

    pub async fn top_accounts(&self) -> Result<Value> {
        self.get_json("home/accounts", Query::new()).await
    }

    pub async fn top_bakers(&self) -> Result<Value> {
        self.get_json("home/bakers", Query::new()).await
    }
}
