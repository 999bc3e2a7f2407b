//! API Transport Port - Interface for exchanging JSON with the legislature API.
//!
//! This port carries raw JSON documents to and from the remote service. Typed
//! decoding happens one layer up in [`crate::application::ApiClient`], so a
//! transport only has to distinguish "could not reach the server", "server
//! said no" and "server sent something that is not JSON".
//!
//! # Design
//!
//! - One attempt per call; no retries, no timeout
//! - No caching
//! - Endpoints are a closed set, see [`Endpoint`]

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{DebateId, MemberId, PartyId, ProposalId};
use crate::domain::legislature::EntityKind;

/// Port for JSON request/response exchange with the API.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Issues a GET and returns the decoded JSON body.
    async fn get(&self, endpoint: &Endpoint) -> Result<Value, ApiFailure>;

    /// Issues a POST with a JSON body and returns the decoded JSON response.
    async fn post(&self, endpoint: &Endpoint, body: &Value) -> Result<Value, ApiFailure>;
}

/// HTTP method used for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Every resource the client talks to, relative to the API base address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Collection(EntityKind),
    Proposal(ProposalId),
    Party(PartyId),
    Member(MemberId),
    Debate(DebateId),
    StartSimulation(ProposalId),
    SimulationStatus(ProposalId),
}

impl Endpoint {
    /// Path relative to the versioned base address.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Collection(kind) => kind.collection_path(),
            Endpoint::Proposal(id) => EntityKind::Proposal.item_path(id.value()),
            Endpoint::Party(id) => EntityKind::Party.item_path(id.value()),
            Endpoint::Member(id) => EntityKind::Member.item_path(id.value()),
            Endpoint::Debate(id) => EntityKind::Debate.item_path(id.value()),
            Endpoint::StartSimulation(id) => format!("/simulation/{}/start", id),
            Endpoint::SimulationStatus(id) => format!("/simulation/{}/status", id),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Category of a failed exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Transport,
    Status,
    Parse,
}

/// Why an exchange produced no data.
///
/// Callers only act on "present vs. absent"; the variants exist for logging
/// and for tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiFailure {
    /// The server could not be reached or the connection broke.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The body was not JSON or did not match the expected structure.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiFailure {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ApiFailure::Transport(_) => FailureKind::Transport,
            ApiFailure::Status { .. } => FailureKind::Status,
            ApiFailure::Parse(_) => FailureKind::Parse,
        }
    }
}
