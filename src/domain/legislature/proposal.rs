//! Proposal records exchanged with the legislature API.

use serde::{Deserialize, Serialize};

use super::ProposalStatus;
use crate::domain::foundation::{MemberId, PartyId, ProposalId, Timestamp};

/// Proposal as returned by the collection endpoint and by creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSummary {
    pub id: ProposalId,
    pub title: String,
    pub status: ProposalStatus,
}

/// Fully expanded proposal returned by `GET /proposals/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalDetail {
    pub id: ProposalId,
    pub title: String,
    /// Rich text body, passed through untouched.
    pub content: String,
    pub status: ProposalStatus,
    pub proposer: Proposer,
    pub submitted_date: Timestamp,
    #[serde(default)]
    pub vote_date: Option<Timestamp>,
    #[serde(default)]
    pub votes_summary: Option<VotesSummary>,
}

impl ProposalDetail {
    /// "Name (ABBR)" line shown under the title.
    pub fn proposer_line(&self) -> String {
        format!(
            "{} ({})",
            self.proposer.name, self.proposer.party.abbreviation
        )
    }
}

/// Member who tabled the proposal, with their party embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposer {
    pub id: MemberId,
    pub name: String,
    pub party: PartyRef,
}

/// Minimal party reference embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRef {
    pub id: PartyId,
    pub name: String,
    pub abbreviation: String,
}

/// Aggregated vote tally, present once voting has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotesSummary {
    pub total: u32,
    pub for_votes: u32,
    pub against_votes: u32,
    pub abstain_votes: u32,
    pub absent_votes: u32,
    pub passed: bool,
}

/// Body of `POST /proposals/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProposal {
    pub title: String,
    pub content: String,
    pub proposer_id: MemberId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detail_json() -> serde_json::Value {
        json!({
            "id": 7,
            "title": "Climate Act",
            "content": "<p>Reduce emissions</p>",
            "status": "passed",
            "proposer": {
                "id": 3,
                "name": "Jan de Vries",
                "party": {"id": 1, "name": "Volkspartij", "abbreviation": "VP"}
            },
            "submitted_date": "2024-03-01T09:30:00",
            "vote_date": "2024-03-08T14:00:00",
            "votes_summary": {
                "total": 10, "for_votes": 7, "against_votes": 2,
                "abstain_votes": 1, "absent_votes": 0, "passed": true
            }
        })
    }

    #[test]
    fn detail_deserializes_with_votes() {
        let detail: ProposalDetail = serde_json::from_value(detail_json()).unwrap();
        assert_eq!(detail.id, ProposalId::new(7));
        assert_eq!(detail.status, ProposalStatus::Passed);
        let votes = detail.votes_summary.unwrap();
        assert_eq!(votes.total, 10);
        assert!(votes.passed);
        assert!(detail.vote_date.is_some());
    }

    #[test]
    fn detail_tolerates_missing_optional_fields() {
        let mut value = detail_json();
        let obj = value.as_object_mut().unwrap();
        obj.remove("vote_date");
        obj.insert("votes_summary".to_string(), serde_json::Value::Null);

        let detail: ProposalDetail = serde_json::from_value(value).unwrap();
        assert!(detail.vote_date.is_none());
        assert!(detail.votes_summary.is_none());
    }

    #[test]
    fn detail_requires_proposer() {
        let mut value = detail_json();
        value.as_object_mut().unwrap().remove("proposer");
        assert!(serde_json::from_value::<ProposalDetail>(value).is_err());
    }

    #[test]
    fn proposer_line_includes_party_abbreviation() {
        let detail: ProposalDetail = serde_json::from_value(detail_json()).unwrap();
        assert_eq!(detail.proposer_line(), "Jan de Vries (VP)");
    }

    #[test]
    fn new_proposal_serializes_numeric_proposer() {
        let body = NewProposal {
            title: "T".to_string(),
            content: "C".to_string(),
            proposer_id: MemberId::new(3),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "T", "content": "C", "proposer_id": 3})
        );
    }
}
