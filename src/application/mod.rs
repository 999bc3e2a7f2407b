//! Application layer - Handlers and the client facade.
//!
//! Handlers each cover one user-facing operation and talk to the API through
//! [`ApiClient`]. [`ClientApp`] wires them to the navigation state and is the
//! single entry point for the host.

mod api_client;
mod client_app;
pub mod handlers;

pub use api_client::ApiClient;
pub use client_app::{chrome_actions, ClientApp, DispatchError, Outcome};
pub use handlers::{
    FormError, ListEntitiesHandler, ProposalFormController, RenderDetailHandler,
    SimulationProgressHandler, StartSimulationHandler, PROPOSAL_CREATED, SIMULATION_STARTED,
};
