//! Simulation handlers - start the parliamentary simulation for a proposal
//! and fetch its progress.

use crate::application::ApiClient;
use crate::domain::foundation::ProposalId;
use crate::domain::legislature::{SimulationAck, SimulationStatus};
use crate::domain::view::{Badge, ProposalDetailView, SimulationProgressView};
use crate::ports::ApiFailure;

/// Message shown to the user once the server accepted a simulation run.
pub const SIMULATION_STARTED: &str =
    "Simulation started successfully! Check back later for results.";

/// Command handler for `POST /simulation/{id}/start`.
#[derive(Clone)]
pub struct StartSimulationHandler {
    api: ApiClient,
}

impl StartSimulationHandler {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn handle(&self, proposal_id: ProposalId) -> Result<SimulationAck, ApiFailure> {
        let ack = self.api.start_simulation(proposal_id).await?;
        tracing::debug!(%proposal_id, detail = ?ack.detail, "Simulation started");
        Ok(ack)
    }
}

/// Query handler for `GET /simulation/{id}/status`.
#[derive(Clone)]
pub struct SimulationProgressHandler {
    api: ApiClient,
}

impl SimulationProgressHandler {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn handle(&self, proposal_id: ProposalId) -> Result<SimulationProgressView, ApiFailure> {
        let status = self.api.simulation_status(proposal_id).await?;
        Ok(progress_view(&status))
    }
}

pub fn progress_view(status: &SimulationStatus) -> SimulationProgressView {
    SimulationProgressView {
        status_badge: Badge::for_status(&status.status),
        debates_count: status.debates_count,
        votes_count: status.votes_count,
    }
}

/// Returns `view` with `progress` attached, leaving everything else as is.
pub fn attach_progress(
    view: &ProposalDetailView,
    progress: SimulationProgressView,
) -> ProposalDetailView {
    ProposalDetailView {
        progress: Some(progress),
        ..view.clone()
    }
}
