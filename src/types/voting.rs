use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alias, timestamp};

/// A protocol amendment proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub hash: String,
    pub initiator: Alias,
    pub first_period: i64,
    pub last_period: i64,
    pub epoch: i64,
    pub upvotes: u64,
    pub rolls: u64,
    /// `active`, `accepted`, `rejected` or `skipped`.
    pub status: String,
    pub metadata: Option<serde_json::Value>,
}

/// A voting period. Vote statistics are only present for periods that accept them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingPeriod {
    pub index: i64,
    pub epoch: i64,
    pub first_level: i64,
    #[serde(default, with = "timestamp::option")]
    pub start_time: Option<DateTime<Utc>>,
    pub last_level: i64,
    #[serde(default, with = "timestamp::option")]
    pub end_time: Option<DateTime<Utc>>,
    /// `proposal`, `exploration`, `testing`, `promotion` or `adoption`.
    pub kind: String,
    pub status: String,
    pub total_bakers: Option<u64>,
    pub total_rolls: Option<u64>,
    pub upvotes_quorum: Option<f64>,
    pub proposals_count: Option<u64>,
    pub top_upvotes: Option<u64>,
    pub top_rolls: Option<u64>,
    pub ballots_quorum: Option<f64>,
    pub supermajority: Option<f64>,
    pub yay_ballots: Option<u64>,
    pub yay_rolls: Option<u64>,
    pub nay_ballots: Option<u64>,
    pub nay_rolls: Option<u64>,
    pub pass_ballots: Option<u64>,
    pub pass_rolls: Option<u64>,
}

/// A full amendment cycle, from proposal to adoption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingEpoch {
    pub index: i64,
    pub first_level: i64,
    #[serde(default, with = "timestamp::option")]
    pub start_time: Option<DateTime<Utc>>,
    pub last_level: i64,
    #[serde(default, with = "timestamp::option")]
    pub end_time: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(default)]
    pub periods: Vec<VotingPeriod>,
    #[serde(default)]
    pub proposals: Vec<Proposal>,
}

/// A delegate's participation in a voting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodVoter {
    pub delegate: Alias,
    pub rolls: u64,
    /// `none`, `upvoted`, `voted_yay`, `voted_nay` or `voted_pass`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn epoch_with_nested_periods() {
        let value = json!({
            "index": 40,
            "firstLevel": 1466369,
            "startTime": "2021-05-09T00:00:00Z",
            "lastLevel": 1486848,
            "endTime": "2021-05-23T00:00:00Z",
            "status": "completed",
            "periods": [{
                "index": 50,
                "epoch": 40,
                "firstLevel": 1466369,
                "startTime": "2021-05-09T00:00:00Z",
                "lastLevel": 1486848,
                "endTime": "2021-05-23T00:00:00Z",
                "kind": "proposal",
                "status": "no_proposals",
                "totalBakers": 400,
                "totalRolls": 80000,
                "upvotesQuorum": 5.0,
                "proposalsCount": 0,
                "topUpvotes": 0,
                "topRolls": 0
            }],
            "proposals": []
        });
        let epoch: VotingEpoch = serde_json::from_value(value).unwrap();
        assert_eq!(epoch.periods.len(), 1);
        assert_eq!(epoch.periods[0].kind, "proposal");
        assert_eq!(epoch.periods[0].ballots_quorum, None);
        assert!(epoch.proposals.is_empty());
    }

    #[test]
    fn period_voter() {
        let voter: PeriodVoter = serde_json::from_value(json!({
            "delegate": {"alias": "Baker", "address": "tz1baker"},
            "rolls": 12,
            "status": "voted_yay"
        }))
        .unwrap();
        assert_eq!(voter.rolls, 12);
        assert_eq!(voter.status, "voted_yay");
    }
}
