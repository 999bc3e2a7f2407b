//! User-triggerable actions and the tables that bind them to rendered views.
//!
//! Renderers never attach callbacks. Each render returns its view together
//! with an [`ActionTable`]; the host binds every listed id to a control and
//! reports activations back by id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{DebateId, MemberId, PartyId, ProposalId};
use crate::domain::legislature::EntityKind;

/// Stable identifier of a bound action, unique within one screen.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entity a "View" action opens in the detail slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DetailTarget {
    Proposal(ProposalId),
    Party(PartyId),
    Member(MemberId),
    Debate(DebateId),
}

impl DetailTarget {
    pub fn kind(&self) -> EntityKind {
        match self {
            DetailTarget::Proposal(_) => EntityKind::Proposal,
            DetailTarget::Party(_) => EntityKind::Party,
            DetailTarget::Member(_) => EntityKind::Member,
            DetailTarget::Debate(_) => EntityKind::Debate,
        }
    }

    pub fn raw_id(&self) -> i64 {
        match self {
            DetailTarget::Proposal(id) => id.value(),
            DetailTarget::Party(id) => id.value(),
            DetailTarget::Member(id) => id.value(),
            DetailTarget::Debate(id) => id.value(),
        }
    }
}

/// What happens when a bound control is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Switch to a list section and reload it.
    Navigate { kind: EntityKind },
    /// Leave the detail slot.
    Back,
    /// Open the new-proposal form.
    NewProposal,
    /// Fetch one entity and show it in the detail slot.
    ViewDetail { target: DetailTarget },
    /// Ask the server to run the parliamentary simulation.
    StartSimulation { proposal_id: ProposalId },
    /// Fetch simulation progress and attach it to the open proposal.
    CheckProgress { proposal_id: ProposalId },
    /// Submit the new-proposal form with the host's field values.
    SubmitProposal,
}

impl Action {
    /// Deterministic id for this action.
    pub fn id(&self) -> ActionId {
        match self {
            Action::Navigate { kind } => ActionId::new(format!("nav-{}", kind.resource())),
            Action::Back => ActionId::new("back"),
            Action::NewProposal => ActionId::new("new-proposal"),
            Action::ViewDetail { target } => {
                ActionId::new(format!("view-{}-{}", target.kind(), target.raw_id()))
            }
            Action::StartSimulation { proposal_id } => {
                ActionId::new(format!("start-simulation-{}", proposal_id))
            }
            Action::CheckProgress { proposal_id } => {
                ActionId::new(format!("check-progress-{}", proposal_id))
            }
            Action::SubmitProposal => ActionId::new("submit-proposal"),
        }
    }
}

/// Explicit {action-id -> action} table returned alongside a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTable {
    entries: BTreeMap<ActionId, Action>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action and returns the id the view should reference.
    pub fn bind(&mut self, action: Action) -> ActionId {
        let id = action.id();
        self.entries.insert(id.clone(), action);
        id
    }

    pub fn get(&self, id: &ActionId) -> Option<&Action> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &ActionId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActionId, &Action)> {
        self.entries.iter()
    }

    /// Returns true if any bound action satisfies the predicate.
    pub fn any(&self, predicate: impl Fn(&Action) -> bool) -> bool {
        self.entries.values().any(predicate)
    }

    /// Merges another table into this one; later bindings win.
    pub fn extend(&mut self, other: &ActionTable) {
        for (id, action) in other.iter() {
            self.entries.insert(id.clone(), action.clone());
        }
    }
}

/// A view description paired with the actions it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered<V> {
    pub view: V,
    pub actions: ActionTable,
}

impl<V> Rendered<V> {
    pub fn new(view: V, actions: ActionTable) -> Self {
        Self { view, actions }
    }

    /// Transforms the view while keeping the bound actions.
    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Rendered<W> {
        Rendered {
            view: f(self.view),
            actions: self.actions,
        }
    }
}
