//! List section contents.

use serde::Serialize;

use super::{ActionId, Badge};
use crate::domain::legislature::EntityKind;

/// Contents of one list section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub kind: EntityKind,
    pub body: ListBody,
}

/// Either a single informational placeholder or the item rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum ListBody {
    Placeholder(String),
    Rows(Vec<ListRow>),
}

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub heading: String,
    pub badge: Option<Badge>,
    pub subtitle: Option<String>,
    pub view_action: ActionId,
}

impl ListView {
    pub fn placeholder(kind: EntityKind) -> Self {
        Self {
            kind,
            body: ListBody::Placeholder(kind.empty_message().to_string()),
        }
    }

    pub fn rows(&self) -> &[ListRow] {
        match &self.body {
            ListBody::Rows(rows) => rows,
            ListBody::Placeholder(_) => &[],
        }
    }

    pub fn placeholder_message(&self) -> Option<&str> {
        match &self.body {
            ListBody::Placeholder(message) => Some(message),
            ListBody::Rows(_) => None,
        }
    }
}
