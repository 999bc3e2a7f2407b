//! Legislature records as the remote API exposes them.
//!
//! These are pass-through records: the client owns no persistent state and
//! never mutates them, it only maps them to views.

mod debate;
mod entity_kind;
mod member;
mod party;
mod proposal;
mod proposal_status;
mod simulation;

pub use debate::{Debate, DebateDetail, DebateEntry, ProposalRef, SpeakerRef};
pub use entity_kind::EntityKind;
pub use member::{Member, MemberDetail};
pub use party::{MemberBasic, Party, PartyDetail};
pub use proposal::{NewProposal, PartyRef, ProposalDetail, ProposalSummary, Proposer, VotesSummary};
pub use proposal_status::ProposalStatus;
pub use simulation::{SimulationAck, SimulationStatus};
