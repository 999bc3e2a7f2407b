//! ApiClient - typed access to the legislature API over any transport.
//!
//! Decodes transport JSON into domain records. Every failure (transport,
//! status or parse) is logged here once and handed back as an [`ApiFailure`];
//! callers treat it as "no data".

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::foundation::{DebateId, MemberId, PartyId, ProposalId};
use crate::domain::legislature::{
    Debate, DebateDetail, EntityKind, Member, MemberDetail, NewProposal, Party, PartyDetail,
    ProposalDetail, ProposalSummary, SimulationAck, SimulationStatus,
};
use crate::ports::{ApiFailure, ApiTransport, Endpoint, HttpMethod};

/// Typed client for the legislature API.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetches a whole collection, in the order the API returns it.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
    ) -> Result<Vec<T>, ApiFailure> {
        let endpoint = Endpoint::Collection(kind);
        let result = self.transport.get(&endpoint).await;
        decode(HttpMethod::Get, &endpoint, result)
    }

    /// Fetches a single record.
    pub async fn fetch_one<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiFailure> {
        let result = self.transport.get(&endpoint).await;
        decode(HttpMethod::Get, &endpoint, result)
    }

    /// Posts `body` and decodes the response.
    pub async fn submit<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, ApiFailure>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiFailure::parse(format!("Failed to encode request body: {}", e)))?;
        let result = self.transport.post(&endpoint, &body).await;
        decode(HttpMethod::Post, &endpoint, result)
    }

    pub async fn list_proposals(&self) -> Result<Vec<ProposalSummary>, ApiFailure> {
        self.fetch_collection(EntityKind::Proposal).await
    }

    pub async fn list_parties(&self) -> Result<Vec<Party>, ApiFailure> {
        self.fetch_collection(EntityKind::Party).await
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, ApiFailure> {
        self.fetch_collection(EntityKind::Member).await
    }

    pub async fn list_debates(&self) -> Result<Vec<Debate>, ApiFailure> {
        self.fetch_collection(EntityKind::Debate).await
    }

    pub async fn get_proposal(&self, id: ProposalId) -> Result<ProposalDetail, ApiFailure> {
        self.fetch_one(Endpoint::Proposal(id)).await
    }

    pub async fn get_party(&self, id: PartyId) -> Result<PartyDetail, ApiFailure> {
        self.fetch_one(Endpoint::Party(id)).await
    }

    pub async fn get_member(&self, id: MemberId) -> Result<MemberDetail, ApiFailure> {
        self.fetch_one(Endpoint::Member(id)).await
    }

    pub async fn get_debate(&self, id: DebateId) -> Result<DebateDetail, ApiFailure> {
        self.fetch_one(Endpoint::Debate(id)).await
    }

    pub async fn create_proposal(&self, proposal: &NewProposal) -> Result<ProposalSummary, ApiFailure> {
        self.submit(Endpoint::Collection(EntityKind::Proposal), proposal)
            .await
    }

    /// Starts the server-side simulation; the request body is always `{}`.
    pub async fn start_simulation(&self, id: ProposalId) -> Result<SimulationAck, ApiFailure> {
        self.submit(Endpoint::StartSimulation(id), &serde_json::Map::new())
            .await
    }

    pub async fn simulation_status(&self, id: ProposalId) -> Result<SimulationStatus, ApiFailure> {
        self.fetch_one(Endpoint::SimulationStatus(id)).await
    }
}

fn decode<T: DeserializeOwned>(
    method: HttpMethod,
    endpoint: &Endpoint,
    result: Result<Value, ApiFailure>,
) -> Result<T, ApiFailure> {
    let decoded = result.and_then(|body| {
        serde_json::from_value(body)
            .map_err(|e| ApiFailure::parse(format!("Unexpected response structure: {}", e)))
    });
    if let Err(ref failure) = decoded {
        tracing::warn!(%method, path = %endpoint, kind = ?failure.kind(), error = %failure, "API request failed");
    }
    decoded
}
