//! ProposalFormController - renders the new-proposal form, validates the
//! raw field values and posts the proposal.

use thiserror::Error;

use crate::application::ApiClient;
use crate::domain::foundation::{MemberId, ValidationError};
use crate::domain::legislature::{NewProposal, ProposalSummary};
use crate::domain::view::{
    Action, ActionTable, FieldKind, FormField, ProposalFormInput, ProposalFormView, Rendered,
};
use crate::ports::ApiFailure;

/// Message shown to the user once a proposal was created.
pub const PROPOSAL_CREATED: &str = "Proposal created successfully!";

const FORM_HEADING: &str = "Create New Proposal";

/// Why a submission did not produce a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Invalid form input: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Proposal was not accepted: {0}")]
    Rejected(#[from] ApiFailure),
}

/// Controller for the new-proposal form.
#[derive(Clone)]
pub struct ProposalFormController {
    api: ApiClient,
}

impl ProposalFormController {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Renders an empty form.
    pub fn render(&self) -> Rendered<ProposalFormView> {
        self.render_with(ProposalFormInput::default())
    }

    /// Renders the form pre-filled with `values`.
    pub fn render_with(&self, values: ProposalFormInput) -> Rendered<ProposalFormView> {
        let mut actions = ActionTable::new();
        let submit = actions.bind(Action::SubmitProposal);
        let view = ProposalFormView {
            heading: FORM_HEADING,
            fields: form_fields(),
            submit,
            values,
        };
        Rendered::new(view, actions)
    }

    /// Checks presence of every field and that the proposer id is numeric.
    pub fn validate(&self, input: &ProposalFormInput) -> Result<NewProposal, ValidationError> {
        let title = required("title", &input.title)?;
        let content = required("content", &input.content)?;
        let proposer_id = required("proposer_id", &input.proposer_id)?
            .parse::<MemberId>()
            .map_err(|_| ValidationError::invalid_format("proposer_id", "must be a whole number"))?;

        Ok(NewProposal {
            title,
            content,
            proposer_id,
        })
    }

    /// Validates `input` and posts it to `/proposals/`.
    pub async fn submit(&self, input: &ProposalFormInput) -> Result<ProposalSummary, FormError> {
        let proposal = self.validate(input)?;
        let created = self.api.create_proposal(&proposal).await?;
        tracing::debug!(proposal_id = %created.id, "Proposal created");
        Ok(created)
    }
}

/// Rejects blank values; accepted values are kept exactly as typed.
fn required(field: &str, raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(raw.to_string())
}

fn form_fields() -> Vec<FormField> {
    vec![
        FormField {
            name: "title",
            label: "Title",
            kind: FieldKind::Text,
            required: true,
        },
        FormField {
            name: "content",
            label: "Content",
            kind: FieldKind::MultiLine { rows: 5 },
            required: true,
        },
        FormField {
            name: "proposer_id",
            label: "Proposer ID",
            kind: FieldKind::Number,
            required: true,
        },
    ]
}
