use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::{Filters, PAGINATION_FIELDS};
use crate::types::{Contract, ContractCodeFormat, Entrypoint, EntrypointOptions};

const CONTRACT_FILTERS: &[&str] = &[
    "kind",
    "creator",
    "manager",
    "delegate",
    "lastActivity",
    "typeHash",
    "codeHash",
    "sort",
    "offset",
    "limit",
];
const CONTRACT_COUNT_FILTERS: &[&str] = &["kind"];

impl TzktClient {
    /// Lists smart contracts. With `include_storage`, each carries its current storage.
    pub async fn contracts(&self, filters: &Filters, include_storage: bool) -> Result<Vec<Contract>> {
        let query = Query::filtered(filters, CONTRACT_FILTERS)?
            .param_opt("includeStorage", include_storage.then_some(true));
        self.get_json("contracts", query).await
    }

    pub async fn contract_count(&self, filters: &Filters) -> Result<u64> {
        let query = Query::filtered(filters, CONTRACT_COUNT_FILTERS)?;
        self.get_count("contracts/count", query).await
    }

    pub async fn contract(&self, address: &str) -> Result<Contract> {
        self.get_json(Path::new("contracts").arg(address), Query::new())
            .await
    }

    /// Contracts sharing the type hash of `address`.
    pub async fn similar_contracts(&self, address: &str, filters: &Filters) -> Result<Vec<Contract>> {
        let query = Query::filtered(filters, PAGINATION_FIELDS)?;
        self.get_json(Path::new("contracts").arg(address).then("similar"), query)
            .await
    }

    /// Raw contract code, in the representation chosen by `format`.
    pub async fn contract_code(&self, address: &str, format: ContractCodeFormat) -> Result<Vec<u8>> {
        let query = Query::new().param("format", u32::from(format.as_param()));
        self.get_bytes(Path::new("contracts").arg(address).then("code"), query)
            .await
    }

    pub async fn entrypoint(
        &self,
        address: &str,
        name: &str,
        options: EntrypointOptions,
    ) -> Result<Entrypoint> {
        let query = Query::new()
            .param("json", options.json)
            .param("micheline", options.micheline)
            .param("michelson", options.michelson);
        self.get_json(Path::new("contracts").arg(address).then("entrypoints").arg(name), query)
            .await
    }
}
