//! Simulation endpoint payloads.

use serde::{Deserialize, Serialize};

use super::{ProposalStatus, VotesSummary};
use crate::domain::foundation::ProposalId;

/// Acknowledgment returned by `POST /simulation/{id}/start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationAck {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Progress report returned by `GET /simulation/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStatus {
    pub proposal_id: ProposalId,
    pub status: ProposalStatus,
    pub debates_count: u32,
    pub votes_count: u32,
    #[serde(default)]
    pub vote_summary: Option<VotesSummary>,
}
