use serde_json::Value;

use super::{Path, Query, Result, TzktClient};
use crate::query_helpers::{Filters, PAGINATION_FIELDS};
use crate::types::{PeriodVoter, Proposal, VotingEpoch, VotingPeriod};

const PROPOSAL_FILTERS: &[&str] = &["epoch", "sort", "offset", "limit"];
const VOTER_FILTERS: &[&str] = &["status", "sort", "offset", "limit"];

impl TzktClient {
    // ── Proposals ────────────────────────────────────────────────

    pub async fn proposals(&self, filters: &Filters) -> Result<Vec<Proposal>> {
        let query = Query::filtered(filters, PROPOSAL_FILTERS)?;
        self.get_json("voting/proposals", query).await
    }

    pub async fn proposal_count(&self) -> Result<u64> {
        self.get_count("voting/proposals/count", Query::new()).await
    }

    pub async fn proposal(&self, hash: &str) -> Result<Proposal> {
        self.get_json(Path::new("voting/proposals").arg(hash), Query::new())
            .await
    }

    pub async fn proposal_suggestions(&self, query: &str) -> Result<Vec<Value>> {
        self.get_json(Path::new("suggest/proposals").arg(query), Query::new())
            .await
    }

    // ── Periods ──────────────────────────────────────────────────

    pub async fn voting_periods(&self, filters: &Filters) -> Result<Vec<VotingPeriod>> {
        let query = Query::filtered(filters, PAGINATION_FIELDS)?;
        self.get_json("voting/periods", query).await
    }

    pub async fn voting_period(&self, index: i64) -> Result<VotingPeriod> {
        self.get_json(Path::new("voting/periods").arg(index), Query::new())
            .await
    }

    pub async fn current_voting_period(&self) -> Result<VotingPeriod> {
        self.get_json("voting/periods/current", Query::new()).await
    }

    // ── Epochs ───────────────────────────────────────────────────

    pub async fn voting_epochs(&self, filters: &Filters) -> Result<Vec<VotingEpoch>> {
        let query = Query::filtered(filters, PAGINATION_FIELDS)?;
        self.get_json("voting/epochs", query).await
    }

    pub async fn voting_epoch(&self, index: i64) -> Result<VotingEpoch> {
        self.get_json(Path::new("voting/epochs").arg(index), Query::new())
            .await
    }

    pub async fn current_voting_epoch(&self) -> Result<VotingEpoch> {
        self.get_json("voting/epochs/current", Query::new()).await
    }

    /// Most recent epoch that had at least one proposal.
    pub async fn latest_voting_epoch(&self) -> Result<VotingEpoch> {
        self.get_json("voting/epochs/latest_voting", Query::new())
            .await
    }

    // ── Voters ───────────────────────────────────────────────────

    pub async fn period_voters(&self, index: i64, filters: &Filters) -> Result<Vec<PeriodVoter>> {
        let query = Query::filtered(filters, VOTER_FILTERS)?;
        self.get_json(Path::new("voting/periods").arg(index).then("voters"), query)
            .await
    }

    pub async fn period_voter(&self, index: i64, address: &str) -> Result<PeriodVoter> {
        let path = Path::new("voting/periods").arg(index).then("voters").arg(address);
        self.get_json(path, Query::new()).await
    }

    pub async fn current_period_voters(&self, filters: &Filters) -> Result<Vec<PeriodVoter>> {
        let query = Query::filtered(filters, VOTER_FILTERS)?;
        self.get_json("voting/periods/current/voters", query).await
    }

    pub async fn current_period_voter(&self, address: &str) -> Result<PeriodVoter> {
        let path = Path::new("voting/periods/current/voters").arg(address);
        self.get_json(path, Query::new()).await
    }
}
