//! Operation lookups.
//!
//! Endpoints returning a single kind are generic over [`OperationKind`], so
//! `client.operations::<Transaction>(&filters)` hits `/v1/operations/transactions`.
//! Endpoints that can mix kinds return the tagged [`Operation`] enum.

use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::types::{
    ACCOUNT_OPERATION_FILTERS, MichelineFormat, OPERATION_COUNT_FILTERS, Operation, OperationKind,
    QuoteCurrency,
};

impl TzktClient {
    /// All operations in the group identified by `hash`, whatever their kind.
    pub async fn operations_by_hash(
        &self,
        hash: &str,
        quote: &[QuoteCurrency],
    ) -> Result<Vec<Operation>> {
        self.get_json(Path::new("operations").arg(hash), Query::new().quote(quote))
            .await
    }

    /// Operations of the group `hash` sharing the manager `counter`, internal ones included.
    pub async fn operations_by_hash_counter(
        &self,
        hash: &str,
        counter: i64,
        micheline: MichelineFormat,
        quote: &[QuoteCurrency],
    ) -> Result<Vec<Operation>> {
        let query = Query::new().micheline(micheline).quote(quote);
        self.get_json(Path::new("operations").arg(hash).arg(counter), query)
            .await
    }

    /// Operations involving `address`. A `type` list is sent comma-joined.
    pub async fn account_operations(
        &self,
        address: &str,
        filters: &Filters,
        micheline: MichelineFormat,
    ) -> Result<Vec<Operation>> {
        let query = Query::filtered(filters, ACCOUNT_OPERATION_FILTERS)?
            .join_lists("type")
            .micheline(micheline);
        self.get_json(Path::new("accounts").arg(address).then("operations"), query)
            .await
    }

    pub async fn operations<T: OperationKind>(&self, filters: &Filters) -> Result<Vec<T>> {
        let query = Query::filtered(filters, T::FILTERS)?;
        self.get_json(Path::new("operations").then(T::PATH), query)
            .await
    }

    /// Operations of kind `T` in the group identified by `hash`.
    pub async fn operation_by_hash<T: OperationKind>(
        &self,
        hash: &str,
        quote: &[QuoteCurrency],
    ) -> Result<Vec<T>> {
        let query = Query::new().quote(quote);
        self.get_json(Path::new("operations").then(T::PATH).arg(hash), query)
            .await
    }

    pub async fn operation_count<T: OperationKind>(&self, filters: &Filters) -> Result<u64> {
        let query = Query::filtered(filters, OPERATION_COUNT_FILTERS)?;
        self.get_count(Path::new("operations").then(T::PATH).then("count"), query)
            .await
    }
}
