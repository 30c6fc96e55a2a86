use super::{Query, Result, TzktClient};
use crate::types::Head;

impl TzktClient {
    /// Indexer state: last indexed block, sync status and latest quotes.
    pub async fn head(&self) -> Result<Head> {
        self.get_json("head", Query::new()).await
    }
}
