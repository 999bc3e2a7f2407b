//! Debate records exchanged with the legislature API.

use serde::{Deserialize, Serialize};

use super::ProposalStatus;
use crate::domain::foundation::{DebateId, MemberId, ProposalId, Timestamp};

/// Debate as listed by `GET /debates/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debate {
    pub id: DebateId,
    pub title: String,
    pub proposal_id: ProposalId,
    #[serde(default)]
    pub date: Option<Timestamp>,
}

/// Debate transcript from `GET /debates/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateDetail {
    pub id: DebateId,
    pub title: String,
    pub proposal_id: ProposalId,
    #[serde(default)]
    pub date: Option<Timestamp>,
    #[serde(default)]
    pub proposal: Option<ProposalRef>,
    #[serde(default)]
    pub entries: Vec<DebateEntry>,
}

/// Proposal reference embedded in a debate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalRef {
    pub id: ProposalId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<ProposalStatus>,
}

/// One contribution to a debate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateEntry {
    pub id: i64,
    pub member_id: MemberId,
    pub content: String,
    pub timestamp: Timestamp,
    #[serde(default)]
    pub member: Option<SpeakerRef>,
}

impl DebateEntry {
    /// Speaker name, falling back to the member id when the API omits it.
    pub fn speaker(&self) -> String {
        self.member
            .as_ref()
            .map(|m| m.name.clone())
            .unwrap_or_else(|| format!("Member {}", self.member_id))
    }
}

/// Speaker reference embedded in a debate entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerRef {
    pub id: MemberId,
    pub name: String,
}
