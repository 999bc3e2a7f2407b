//! Section enum for the mutually exclusive areas of the screen.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;
use crate::domain::legislature::EntityKind;

/// The single logical section currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Nothing shown yet; only exists before the first navigation.
    #[default]
    Hidden,
    ProposalsList,
    PartiesList,
    MembersList,
    DebatesList,
    Detail,
}

impl Section {
    /// Every section that can be shown.
    pub const VISIBLE: [Section; 5] = [
        Section::ProposalsList,
        Section::PartiesList,
        Section::MembersList,
        Section::DebatesList,
        Section::Detail,
    ];

    /// List section that hosts the given collection.
    pub fn list(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Proposal => Section::ProposalsList,
            EntityKind::Party => Section::PartiesList,
            EntityKind::Member => Section::MembersList,
            EntityKind::Debate => Section::DebatesList,
        }
    }

    /// Collection shown by this section, if it is a list.
    pub fn list_kind(&self) -> Option<EntityKind> {
        match self {
            Section::ProposalsList => Some(EntityKind::Proposal),
            Section::PartiesList => Some(EntityKind::Party),
            Section::MembersList => Some(EntityKind::Member),
            Section::DebatesList => Some(EntityKind::Debate),
            Section::Hidden | Section::Detail => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Section::Hidden)
    }

    /// Any visible section may follow any state; nothing returns to `Hidden`.
    pub fn can_transition_to(&self, target: Section) -> bool {
        target.is_visible()
    }

    pub fn transition_to(&self, target: Section) -> Result<Section, ValidationError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "section",
                format!("cannot change from {} to {}", self, target),
            ))
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Section::Hidden => "Hidden",
            Section::ProposalsList => "Proposals",
            Section::PartiesList => "Parties",
            Section::MembersList => "Members",
            Section::DebatesList => "Debates",
            Section::Detail => "Detail",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hidden() {
        assert_eq!(Section::default(), Section::Hidden);
        assert!(!Section::Hidden.is_visible());
    }

    #[test]
    fn list_and_list_kind_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(Section::list(kind).list_kind(), Some(kind));
        }
        assert_eq!(Section::Detail.list_kind(), None);
    }

    #[test]
    fn nothing_transitions_back_to_hidden() {
        for from in Section::VISIBLE {
            assert!(!from.can_transition_to(Section::Hidden));
            assert!(from.transition_to(Section::Hidden).is_err());
        }
    }

    #[test]
    fn every_visible_section_is_reachable_from_every_state() {
        for from in [Section::Hidden, Section::Detail, Section::MembersList] {
            for target in Section::VISIBLE {
                assert_eq!(from.transition_to(target), Ok(target));
            }
        }
    }
}
