use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::{Filters, PAGINATION_FIELDS};
use crate::types::{Account, AccountMetadata, Alias, Contract};

const ACCOUNT_FILTERS: &[&str] = &[
    "type",
    "kind",
    "delegate",
    "balance",
    "staked",
    "lastActivity",
    "sort",
    "offset",
    "limit",
];
const ACCOUNT_COUNT_FILTERS: &[&str] = &["type", "kind", "balance", "staked"];

impl TzktClient {
    /// Lists accounts, filtered by type, kind, delegate, balance, staked or last activity.
    pub async fn accounts(&self, filters: &Filters) -> Result<Vec<Account>> {
        let query = Query::filtered(filters, ACCOUNT_FILTERS)?;
        self.get_json("accounts", query).await
    }

    pub async fn account_count(&self, filters: &Filters) -> Result<u64> {
        let query = Query::filtered(filters, ACCOUNT_COUNT_FILTERS)?;
        self.get_count("accounts/count", query).await
    }

    /// Looks up one account. With `metadata`, off-chain profile data is included.
    pub async fn account(&self, address: &str, metadata: bool) -> Result<Account> {
        let query = Query::new().param_opt("metadata", metadata.then_some(true));
        self.get_json(Path::new("accounts").arg(address), query).await
    }

    pub async fn account_metadata(&self, address: &str) -> Result<AccountMetadata> {
        self.get_json(Path::new("accounts").arg(address).then("metadata"), Query::new())
            .await
    }

    /// Accounts whose alias matches `query`.
    pub async fn account_suggestions(&self, query: &str) -> Result<Vec<Alias>> {
        self.get_json(Path::new("suggest/accounts").arg(query), Query::new())
            .await
    }

    /// Contracts created or managed by `address`.
    pub async fn account_contracts(&self, address: &str, filters: &Filters) -> Result<Vec<Contract>> {
        let query = Query::filtered(filters, PAGINATION_FIELDS)?;
        self.get_json(Path::new("accounts").arg(address).then("contracts"), query)
            .await
    }
}
