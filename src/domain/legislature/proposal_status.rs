//! ProposalStatus enum for tracking the legislative lifecycle of a proposal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a proposal as reported by the API.
///
/// Values the client does not recognise are preserved in `Other` instead of
/// failing the whole response; they render without a status badge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProposalStatus {
    Draft,
    Submitted,
    Debating,
    Voting,
    Passed,
    Rejected,
    Other(String),
}

impl ProposalStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &str {
        match self {
            ProposalStatus::Draft => "draft",
            ProposalStatus::Submitted => "submitted",
            ProposalStatus::Debating => "debating",
            ProposalStatus::Voting => "voting",
            ProposalStatus::Passed => "passed",
            ProposalStatus::Rejected => "rejected",
            ProposalStatus::Other(raw) => raw,
        }
    }

    /// Returns true if a simulation may still be started.
    ///
    /// Only proposals that have not yet entered debate qualify.
    pub fn can_start_simulation(&self) -> bool {
        matches!(self, ProposalStatus::Draft | ProposalStatus::Submitted)
    }

    /// Returns true while a running simulation is moving the proposal along.
    pub fn is_simulation_running(&self) -> bool {
        matches!(self, ProposalStatus::Debating | ProposalStatus::Voting)
    }

    /// Returns true for one of the six known lifecycle values.
    pub fn is_known(&self) -> bool {
        !matches!(self, ProposalStatus::Other(_))
    }
}

impl From<String> for ProposalStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "draft" => ProposalStatus::Draft,
            "submitted" => ProposalStatus::Submitted,
            "debating" => ProposalStatus::Debating,
            "voting" => ProposalStatus::Voting,
            "passed" => ProposalStatus::Passed,
            "rejected" => ProposalStatus::Rejected,
            _ => ProposalStatus::Other(raw),
        }
    }
}

impl From<ProposalStatus> for String {
    fn from(status: ProposalStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_known_values() {
        let status: ProposalStatus = serde_json::from_str("\"debating\"").unwrap();
        assert_eq!(status, ProposalStatus::Debating);
    }

    #[test]
    fn unknown_value_is_preserved() {
        let status: ProposalStatus = serde_json::from_str("\"withdrawn\"").unwrap();
        assert_eq!(status, ProposalStatus::Other("withdrawn".to_string()));
        assert!(!status.is_known());
        assert_eq!(status.as_str(), "withdrawn");
    }

    #[test]
    fn serializes_to_wire_value() {
        let json = serde_json::to_string(&ProposalStatus::Passed).unwrap();
        assert_eq!(json, "\"passed\"");
    }

    #[test]
    fn only_draft_and_submitted_can_start_simulation() {
        assert!(ProposalStatus::Draft.can_start_simulation());
        assert!(ProposalStatus::Submitted.can_start_simulation());
        for status in [
            ProposalStatus::Debating,
            ProposalStatus::Voting,
            ProposalStatus::Passed,
            ProposalStatus::Rejected,
            ProposalStatus::Other("archived".to_string()),
        ] {
            assert!(!status.can_start_simulation(), "{status} must not start");
        }
    }

    #[test]
    fn debating_and_voting_are_running() {
        assert!(ProposalStatus::Debating.is_simulation_running());
        assert!(ProposalStatus::Voting.is_simulation_running());
        assert!(!ProposalStatus::Passed.is_simulation_running());
        assert!(!ProposalStatus::Draft.is_simulation_running());
    }
}
