use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::{Filters, PAGINATION_FIELDS};
use crate::types::{BakerReward, DelegatorReward, DelegatorSplit, QuoteCurrency, RewardSplit};

const REWARD_FILTERS: &[&str] = &["cycle", "sort", "offset", "limit"];

impl TzktClient {
    pub async fn baker_rewards(
        &self,
        address: &str,
        filters: &Filters,
        quote: &[QuoteCurrency],
    ) -> Result<Vec<BakerReward>> {
        let query = Query::filtered(filters, REWARD_FILTERS)?.quote(quote);
        self.get_json(Path::new("rewards/bakers").arg(address), query)
            .await
    }

    pub async fn baker_reward(
        &self,
        address: &str,
        cycle: i64,
        quote: &[QuoteCurrency],
    ) -> Result<BakerReward> {
        let query = Query::new().quote(quote);
        self.get_json(Path::new("rewards/bakers").arg(address).arg(cycle), query)
            .await
    }

    /// Number of cycles `address` has baker rewards for.
    pub async fn baker_reward_count(&self, address: &str) -> Result<u64> {
        self.get_count(Path::new("rewards/bakers").arg(address).then("count"), Query::new())
            .await
    }

    pub async fn delegator_rewards(
        &self,
        address: &str,
        filters: &Filters,
        quote: &[QuoteCurrency],
    ) -> Result<Vec<DelegatorReward>> {
        let query = Query::filtered(filters, REWARD_FILTERS)?.quote(quote);
        self.get_json(Path::new("rewards/delegators").arg(address), query)
            .await
    }

    pub async fn delegator_reward(
        &self,
        address: &str,
        cycle: i64,
        quote: &[QuoteCurrency],
    ) -> Result<DelegatorReward> {
        let query = Query::new().quote(quote);
        self.get_json(Path::new("rewards/delegators").arg(address).arg(cycle), query)
            .await
    }

    pub async fn delegator_reward_count(&self, address: &str) -> Result<u64> {
        self.get_count(Path::new("rewards/delegators").arg(address).then("count"), Query::new())
            .await
    }

    /// Baker rewards for `cycle` with the delegators sharing them. Pagination applies to
    /// the delegator list.
    pub async fn reward_split(&self, baker: &str, cycle: i64, filters: &Filters) -> Result<RewardSplit> {
        let query = Query::filtered(filters, PAGINATION_FIELDS)?;
        self.get_json(Path::new("rewards/split").arg(baker).arg(cycle), query)
            .await
    }

    pub async fn reward_split_delegator(
        &self,
        baker: &str,
        cycle: i64,
        delegator: &str,
    ) -> Result<DelegatorSplit> {
        let path = Path::new("rewards/split").arg(baker).arg(cycle).arg(delegator);
        self.get_json(path, Query::new()).await
    }
}
