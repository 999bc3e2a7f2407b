//! New-proposal form description and the raw values the host reads back.

use serde::{Deserialize, Serialize};

use super::ActionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    MultiLine { rows: u8 },
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProposalFormView {
    pub heading: &'static str,
    pub fields: Vec<FormField>,
    pub submit: ActionId,
    /// Values to pre-fill, kept after a failed submission.
    pub values: ProposalFormInput,
}

/// Field values exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalFormInput {
    pub title: String,
    pub content: String,
    pub proposer_id: String,
}

impl ProposalFormInput {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        proposer_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            proposer_id: proposer_id.into(),
        }
    }
}
