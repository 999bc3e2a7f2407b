//! The four browsable entity collections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A browsable entity collection exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Proposal,
    Party,
    Member,
    Debate,
}

impl EntityKind {
    /// All kinds in navigation order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Proposal,
        EntityKind::Party,
        EntityKind::Member,
        EntityKind::Debate,
    ];

    /// Path segment of the collection resource.
    pub fn resource(&self) -> &'static str {
        match self {
            EntityKind::Proposal => "proposals",
            EntityKind::Party => "parties",
            EntityKind::Member => "members",
            EntityKind::Debate => "debates",
        }
    }

    /// Collection path, e.g. `/proposals/`.
    pub fn collection_path(&self) -> String {
        format!("/{}/", self.resource())
    }

    /// Item path, e.g. `/proposals/7`.
    pub fn item_path(&self, id: i64) -> String {
        format!("/{}/{}", self.resource(), id)
    }

    /// Message shown when the collection is empty or unavailable.
    pub fn empty_message(&self) -> &'static str {
        match self {
            EntityKind::Proposal => "No proposals found.",
            EntityKind::Party => "No parties found.",
            EntityKind::Member => "No members found.",
            EntityKind::Debate => "No debates found.",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Proposal => "proposal",
            EntityKind::Party => "party",
            EntityKind::Member => "member",
            EntityKind::Debate => "debate",
        };
        write!(f, "{}", s)
    }
}
