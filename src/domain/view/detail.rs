//! Detail slot contents.

use serde::Serialize;

use super::{ActionId, Badge, ProposalFormView};
use crate::domain::foundation::{DebateId, MemberId, PartyId, ProposalId};

/// Whatever currently occupies the detail slot. Replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DetailContent {
    Proposal(ProposalDetailView),
    Party(PartyDetailView),
    Member(MemberDetailView),
    Debate(DebateDetailView),
    ProposalForm(ProposalFormView),
}

impl DetailContent {
    pub fn as_proposal(&self) -> Option<&ProposalDetailView> {
        match self {
            DetailContent::Proposal(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_form(&self) -> Option<&ProposalFormView> {
        match self {
            DetailContent::ProposalForm(view) => Some(view),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalDetailView {
    pub id: ProposalId,
    pub title: String,
    pub status_badge: Option<Badge>,
    /// Proposer name with party abbreviation.
    pub proposer: String,
    pub submitted: String,
    pub vote_date: Option<String>,
    /// Raw rich-text body.
    pub content: String,
    pub vote_results: Option<VoteResultsView>,
    pub start_simulation: Option<ActionId>,
    pub check_progress: Option<ActionId>,
    pub progress: Option<SimulationProgressView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteResultsView {
    pub total: u32,
    pub for_votes: u32,
    pub against_votes: u32,
    pub abstain_votes: u32,
    pub absent_votes: u32,
    pub result: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationProgressView {
    pub status_badge: Option<Badge>,
    pub debates_count: u32,
    pub votes_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyDetailView {
    pub id: PartyId,
    pub name: String,
    pub abbreviation: String,
    pub ideology: Option<String>,
    pub members: Vec<LinkedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberDetailView {
    pub id: MemberId,
    pub name: String,
    /// Party name with abbreviation.
    pub party: String,
    pub role: Option<String>,
    pub career: Vec<String>,
    pub education: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebateDetailView {
    pub id: DebateId,
    pub title: String,
    pub date: Option<String>,
    pub proposal: LinkedItem,
    pub entries: Vec<DebateEntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebateEntryView {
    pub speaker: String,
    pub timestamp: String,
    pub content: String,
}

/// A label that opens another entity in the detail slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedItem {
    pub label: String,
    pub action: ActionId,
}
