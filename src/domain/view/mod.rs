//! View descriptions produced by the renderers.
//!
//! Nothing here touches presentation primitives. A host turns these values
//! into markup, terminal widgets or anything else and binds the referenced
//! [`ActionId`]s.

mod action;
mod badge;
mod detail;
mod form;
mod list;

pub use action::{Action, ActionId, ActionTable, DetailTarget, Rendered};
pub use badge::{Badge, BadgeStyle};
pub use detail::{
    DebateDetailView, DebateEntryView, DetailContent, LinkedItem, MemberDetailView,
    PartyDetailView, ProposalDetailView, SimulationProgressView, VoteResultsView,
};
pub use form::{FieldKind, FormField, ProposalFormInput, ProposalFormView};
pub use list::{ListBody, ListRow, ListView};
