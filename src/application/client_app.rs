//! ClientApp - the event-driven core the host talks to.
//!
//! Owns the navigation controller, the rendered list contents and the
//! action tables of the visible screen. The host renders what the accessors
//! return and reports user activations through [`ClientApp::dispatch`].
//!
//! View state is only touched while the state lock is held, and the lock is
//! never held across a network call. Responses are checked on arrival:
//! - detail and form responses apply only if no navigation happened since
//!   the request was issued (see [`Generation`]); a detail response must
//!   also belong to the latest detail fetch;
//! - list responses apply only if they belong to the latest load of that
//!   list, and never change which section is visible.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use super::handlers::{
    attach_progress, FormError, ListEntitiesHandler, ProposalFormController, RenderDetailHandler,
    SimulationProgressHandler, StartSimulationHandler, PROPOSAL_CREATED, SIMULATION_STARTED,
};
use super::ApiClient;
use crate::adapters::api::ReqwestTransport;
use crate::config::ApiConfig;
use crate::domain::foundation::{ProposalId, ValidationError};
use crate::domain::legislature::EntityKind;
use crate::domain::navigation::{Generation, NavigationController, Section};
use crate::domain::view::{
    Action, ActionId, ActionTable, DetailContent, DetailTarget, ListView, ProposalFormInput,
    Rendered,
};
use crate::ports::{ApiFailure, ApiTransport, Notifier};

/// What an operation did to the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was applied.
    Applied,
    /// The API returned nothing usable; view state is unchanged.
    NoData,
    /// The response arrived after the user moved on and was dropped.
    Stale,
}

/// Errors from [`ClientApp::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Action '{0}' is not bound on the current screen")]
    UnknownAction(ActionId),

    #[error("Action '{0}' requires the form field values")]
    MissingFormInput(ActionId),

    #[error("Invalid form input: {0}")]
    InvalidForm(#[from] ValidationError),
}

#[derive(Default)]
struct ScreenState {
    nav: NavigationController,
    lists: HashMap<EntityKind, Rendered<ListView>>,
    /// Sequence number of the latest load issued per list.
    list_requests: HashMap<EntityKind, u64>,
    detail_actions: ActionTable,
    /// Sequence number of the latest detail fetch issued.
    detail_request: u64,
}

impl ScreenState {
    fn select_list(&mut self, kind: EntityKind) -> u64 {
        self.nav.select_section(kind);
        self.detail_actions = ActionTable::new();
        let request = self.list_requests.entry(kind).or_insert(0);
        *request += 1;
        *request
    }

    fn issue_detail_request(&mut self) -> (Generation, u64) {
        self.detail_request += 1;
        (self.nav.generation(), self.detail_request)
    }

    fn enter_detail(&mut self, rendered: Rendered<DetailContent>) {
        self.nav.enter_detail(rendered.view);
        self.detail_actions = rendered.actions;
    }
}

/// Client core: navigation, rendering and API exchange behind one facade.
pub struct ClientApp {
    lists: ListEntitiesHandler,
    details: RenderDetailHandler,
    simulation: StartSimulationHandler,
    progress: SimulationProgressHandler,
    form: ProposalFormController,
    notifier: Arc<dyn Notifier>,
    state: Mutex<ScreenState>,
}

impl ClientApp {
    pub fn new(transport: Arc<dyn ApiTransport>, notifier: Arc<dyn Notifier>) -> Self {
        let api = ApiClient::new(transport);
        Self {
            lists: ListEntitiesHandler::new(api.clone()),
            details: RenderDetailHandler::new(api.clone()),
            simulation: StartSimulationHandler::new(api.clone()),
            progress: SimulationProgressHandler::new(api.clone()),
            form: ProposalFormController::new(api),
            notifier,
            state: Mutex::new(ScreenState::default()),
        }
    }

    /// Builds a client talking HTTP to the configured API.
    pub fn from_config(config: &ApiConfig, notifier: Arc<dyn Notifier>) -> Result<Self, ApiFailure> {
        let transport = ReqwestTransport::new(config.clone())?;
        Ok(Self::new(Arc::new(transport), notifier))
    }

    /// Shows the proposals list and loads it.
    pub async fn start(&self) -> Outcome {
        self.navigate(EntityKind::Proposal).await
    }

    /// Shows the list for `kind` and reloads its contents.
    pub async fn navigate(&self, kind: EntityKind) -> Outcome {
        let request = self.state().select_list(kind);
        self.load_list(kind, request).await
    }

    /// Fetches `target` and shows it in the detail slot.
    ///
    /// Only the most recently issued detail fetch may fill the slot, and only
    /// if no navigation happened while it was in flight.
    pub async fn show_detail(&self, target: DetailTarget) -> Outcome {
        let (ticket, request) = self.state().issue_detail_request();

        let rendered = match self.details.handle(target).await {
            Ok(rendered) => rendered,
            Err(_) => return Outcome::NoData,
        };

        let mut state = self.state();
        if !state.nav.is_current(ticket) || state.detail_request != request {
            tracing::debug!(?target, ticket = ticket.value(), request, "Discarding stale detail response");
            return Outcome::Stale;
        }
        state.enter_detail(rendered);
        Outcome::Applied
    }

    /// Leaves detail mode and re-shows the preceding list.
    pub fn back(&self) -> Outcome {
        let mut state = self.state();
        if state.nav.active() != Section::Detail {
            return Outcome::NoData;
        }
        state.nav.exit_detail();
        state.detail_actions = ActionTable::new();
        Outcome::Applied
    }

    /// Shows an empty new-proposal form in the detail slot.
    pub fn new_proposal(&self) -> Outcome {
        let rendered = self.form.render().map(DetailContent::ProposalForm);
        self.state().enter_detail(rendered);
        Outcome::Applied
    }

    /// Starts the simulation; on success notifies the user and returns to the
    /// proposals list.
    pub async fn start_simulation(&self, proposal_id: ProposalId) -> Outcome {
        let ticket = self.state().nav.generation();

        if self.simulation.handle(proposal_id).await.is_err() {
            return Outcome::NoData;
        }
        self.notifier.notify(SIMULATION_STARTED);
        self.return_to_proposals(ticket).await
    }

    /// Fetches simulation progress and attaches it to the open proposal.
    pub async fn check_progress(&self, proposal_id: ProposalId) -> Outcome {
        let ticket = self.state().nav.generation();

        let progress = match self.progress.handle(proposal_id).await {
            Ok(progress) => progress,
            Err(_) => return Outcome::NoData,
        };

        let mut state = self.state();
        if !state.nav.is_current(ticket) {
            tracing::debug!(%proposal_id, "Discarding stale progress response");
            return Outcome::Stale;
        }
        let updated = match state.nav.detail() {
            Some(DetailContent::Proposal(view)) if view.id == proposal_id => {
                attach_progress(view, progress)
            }
            _ => return Outcome::Stale,
        };
        state.nav.replace_detail(DetailContent::Proposal(updated));
        Outcome::Applied
    }

    /// Validates and posts the new-proposal form.
    ///
    /// On success the user is notified and the proposals list is shown. On
    /// any failure the form stays open with the entered values.
    pub async fn submit_proposal(&self, input: ProposalFormInput) -> Result<Outcome, ValidationError> {
        let ticket = self.state().nav.generation();

        match self.form.submit(&input).await {
            Ok(_) => {
                self.notifier.notify(PROPOSAL_CREATED);
                Ok(self.return_to_proposals(ticket).await)
            }
            Err(FormError::Invalid(err)) => {
                self.keep_form_values(ticket, input);
                Err(err)
            }
            Err(FormError::Rejected(_)) => {
                self.keep_form_values(ticket, input);
                Ok(Outcome::NoData)
            }
        }
    }

    /// Runs the action bound to `id` on the current screen.
    ///
    /// `form` carries the field values and is only read by the submit action.
    pub async fn dispatch(
        &self,
        id: &ActionId,
        form: Option<ProposalFormInput>,
    ) -> Result<Outcome, DispatchError> {
        let action = self
            .bound_actions()
            .get(id)
            .cloned()
            .ok_or_else(|| DispatchError::UnknownAction(id.clone()))?;
        tracing::debug!(action_id = %id, "Dispatching action");

        let outcome = match action {
            Action::Navigate { kind } => self.navigate(kind).await,
            Action::Back => self.back(),
            Action::NewProposal => self.new_proposal(),
            Action::ViewDetail { target } => self.show_detail(target).await,
            Action::StartSimulation { proposal_id } => self.start_simulation(proposal_id).await,
            Action::CheckProgress { proposal_id } => self.check_progress(proposal_id).await,
            Action::SubmitProposal => {
                let input = form.ok_or_else(|| DispatchError::MissingFormInput(id.clone()))?;
                self.submit_proposal(input).await?
            }
        };
        Ok(outcome)
    }

    /// Every action the host may currently dispatch: the chrome plus the
    /// actions of the visible section.
    pub fn bound_actions(&self) -> ActionTable {
        let state = self.state();
        let mut actions = chrome_actions();
        match state.nav.active() {
            Section::Detail => actions.extend(&state.detail_actions),
            section => {
                if let Some(list) = section.list_kind().and_then(|kind| state.lists.get(&kind)) {
                    actions.extend(&list.actions);
                }
            }
        }
        actions
    }

    pub fn active_section(&self) -> Section {
        self.state().nav.active()
    }

    pub fn visible_sections(&self) -> Vec<Section> {
        self.state().nav.visible_sections()
    }

    /// List whose navigation affordance is highlighted.
    pub fn active_nav(&self) -> Option<EntityKind> {
        self.state().nav.active_nav()
    }

    /// Last rendered contents of the list for `kind`.
    pub fn list_view(&self, kind: EntityKind) -> Option<ListView> {
        self.state().lists.get(&kind).map(|r| r.view.clone())
    }

    pub fn detail(&self) -> Option<DetailContent> {
        self.state().nav.detail().cloned()
    }

    pub fn generation(&self) -> Generation {
        self.state().nav.generation()
    }

    async fn load_list(&self, kind: EntityKind, request: u64) -> Outcome {
        let rendered = self.lists.handle(kind).await;

        let mut state = self.state();
        if state.list_requests.get(&kind) != Some(&request) {
            tracing::debug!(%kind, request, "Discarding superseded list response");
            return Outcome::Stale;
        }
        let outcome = if rendered.view.rows().is_empty() {
            Outcome::NoData
        } else {
            Outcome::Applied
        };
        state.lists.insert(kind, rendered);
        outcome
    }

    async fn return_to_proposals(&self, ticket: Generation) -> Outcome {
        let request = {
            let mut state = self.state();
            if !state.nav.is_current(ticket) {
                tracing::debug!(ticket = ticket.value(), "User navigated away; staying put");
                return Outcome::Stale;
            }
            state.select_list(EntityKind::Proposal)
        };
        self.load_list(EntityKind::Proposal, request).await;
        Outcome::Applied
    }

    fn keep_form_values(&self, ticket: Generation, values: ProposalFormInput) {
        let mut state = self.state();
        if !state.nav.is_current(ticket) {
            return;
        }
        let form = self.form.render_with(values);
        state.nav.replace_detail(DetailContent::ProposalForm(form.view));
    }

    fn state(&self) -> MutexGuard<'_, ScreenState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Navigation actions that are bound on every screen.
pub fn chrome_actions() -> ActionTable {
    let mut actions = ActionTable::new();
    for kind in EntityKind::ALL {
        actions.bind(Action::Navigate { kind });
    }
    actions.bind(Action::Back);
    actions.bind(Action::NewProposal);
    actions
}
