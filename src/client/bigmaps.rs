use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::Filters;
use crate::types::{BigMap, BigMapKey, BigMapType, BigMapUpdate, MichelineFormat};

const BIGMAP_FILTERS: &[&str] = &[
    "contract", "path", "tags", "active", "lastLevel", "sort", "offset", "limit",
];
const CONTRACT_BIGMAP_FILTERS: &[&str] = &["tags", "sort", "offset", "limit"];
const UPDATE_FILTERS: &[&str] = &[
    "bigmap", "path", "contract", "tags", "action", "value", "level", "sort", "offset", "limit",
];
const KEY_FILTERS: &[&str] = &["active", "key", "value", "lastLevel", "sort", "offset", "limit"];

impl TzktClient {
    /// Lists big maps. `tags` lists are sent comma-joined.
    pub async fn bigmaps(&self, filters: &Filters, micheline: MichelineFormat) -> Result<Vec<BigMap>> {
        let query = Query::filtered(filters, BIGMAP_FILTERS)?
            .join_lists("tags")
            .micheline(micheline);
        self.get_json("bigmaps", query).await
    }

    pub async fn bigmap(&self, id: i64, micheline: MichelineFormat) -> Result<BigMap> {
        self.get_json(Path::new("bigmaps").arg(id), Query::new().micheline(micheline))
            .await
    }

    pub async fn contract_bigmaps(
        &self,
        address: &str,
        filters: &Filters,
        micheline: MichelineFormat,
    ) -> Result<Vec<BigMap>> {
        let query = Query::filtered(filters, CONTRACT_BIGMAP_FILTERS)?
            .join_lists("tags")
            .micheline(micheline);
        self.get_json(Path::new("contracts").arg(address).then("bigmaps"), query)
            .await
    }

    /// Looks up a contract's big map by its storage path, e.g. `ledger`.
    pub async fn contract_bigmap(
        &self,
        address: &str,
        name: &str,
        micheline: MichelineFormat,
    ) -> Result<BigMap> {
        let query = Query::new().micheline(micheline);
        self.get_json(Path::new("contracts").arg(address).then("bigmaps").arg(name), query)
            .await
    }

    pub async fn bigmap_type(&self, id: i64) -> Result<BigMapType> {
        self.get_json(Path::new("bigmaps").arg(id).then("type"), Query::new())
            .await
    }

    pub async fn bigmap_updates(
        &self,
        filters: &Filters,
        micheline: MichelineFormat,
    ) -> Result<Vec<BigMapUpdate>> {
        let query = Query::filtered(filters, UPDATE_FILTERS)?
            .join_lists("tags")
            .micheline(micheline);
        self.get_json("bigmaps/updates", query).await
    }

    pub async fn bigmap_keys(
        &self,
        id: i64,
        filters: &Filters,
        micheline: MichelineFormat,
    ) -> Result<Vec<BigMapKey>> {
        let query = Query::filtered(filters, KEY_FILTERS)?.micheline(micheline);
        self.get_json(Path::new("bigmaps").arg(id).then("keys"), query).await
    }

    /// Looks up a key by its plain value or its `expr...` hash.
    pub async fn bigmap_key(&self, id: i64, key: &str, micheline: MichelineFormat) -> Result<BigMapKey> {
        let query = Query::new().micheline(micheline);
        self.get_json(Path::new("bigmaps").arg(id).then("keys").arg(key), query)
            .await
    }
}
