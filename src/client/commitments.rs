use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::types::Commitment;

const COMMITMENT_FILTERS: &[&str] = &[
    "activated", "activationLevel", "balance", "sort", "offset", "limit",
];
const COMMITMENT_COUNT_FILTERS: &[&str] = &["activated", "balance"];

impl TzktClient {
    /// Lists fundraiser commitments.
    pub async fn commitments(&self, filters: &Filters) -> Result<Vec<Commitment>> {
        let query = Query::filtered(filters, COMMITMENT_FILTERS)?;
        self.get_json("commitments", query).await
    }

    pub async fn commitment_count(&self, filters: &Filters) -> Result<u64> {
        let query = Query::filtered(filters, COMMITMENT_COUNT_FILTERS)?;
        self.get_count("commitments/count", query).await
    }

    /// Looks up a commitment by its blinded address.
    pub async fn commitment(&self, blinded_address: &str) -> Result<Commitment> {
        self.get_json(Path::new("commitments").arg(blinded_address), Query::new())
            .await
    }
}
