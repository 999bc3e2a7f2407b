//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary of the legislature domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{DebateId, MemberId, PartyId, ProposalId};
pub use timestamp::Timestamp;
