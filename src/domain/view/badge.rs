//! Status badges derived from proposal lifecycle values.

use serde::{Deserialize, Serialize};

use crate::domain::legislature::ProposalStatus;

/// Visual style of a badge; the host maps these to its own classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    Secondary,
    Primary,
    Info,
    Warning,
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub style: BadgeStyle,
}

impl Badge {
    pub fn new(label: impl Into<String>, style: BadgeStyle) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }

    /// Badge for a concluded vote.
    pub fn vote_result(passed: bool) -> Self {
        if passed {
            Self::new("Passed", BadgeStyle::Success)
        } else {
            Self::new("Rejected", BadgeStyle::Danger)
        }
    }

    /// Raw status tag used on list rows.
    pub fn list_status(status: &ProposalStatus) -> Self {
        Self::new(status.as_str(), BadgeStyle::Primary)
    }

    /// Detail-view badge for a status; `None` for values outside the lifecycle.
    pub fn for_status(status: &ProposalStatus) -> Option<Self> {
        let (label, style) = match status {
            ProposalStatus::Draft => ("Draft", BadgeStyle::Secondary),
            ProposalStatus::Submitted => ("Submitted", BadgeStyle::Primary),
            ProposalStatus::Debating => ("Debating", BadgeStyle::Info),
            ProposalStatus::Voting => ("Voting", BadgeStyle::Warning),
            ProposalStatus::Passed => ("Passed", BadgeStyle::Success),
            ProposalStatus::Rejected => ("Rejected", BadgeStyle::Danger),
            ProposalStatus::Other(_) => return None,
        };
        Some(Self::new(label, style))
    }
}
