//! Application handlers, one per user-facing operation.

mod list_entities;
mod proposal_form;
mod render_detail;
mod simulation;

pub use list_entities::{
    debate_row, member_row, party_row, proposal_row, render_list, ListEntitiesHandler,
};
pub use proposal_form::{FormError, ProposalFormController, PROPOSAL_CREATED};
pub use render_detail::{
    debate_detail, member_detail, party_detail, proposal_detail, RenderDetailHandler,
};
pub use simulation::{
    attach_progress, progress_view, SimulationProgressHandler, StartSimulationHandler,
    SIMULATION_STARTED,
};
