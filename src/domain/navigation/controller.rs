//! Navigation controller owning the visible section and the detail slot.
//!
//! All visibility changes go through [`NavigationController`]'s transitions.
//! Each transition advances a [`Generation`]; fetches are tagged with the
//! generation current when they were issued, and a response may only be
//! applied while that generation is still current.

use serde::{Deserialize, Serialize};

use super::Section;
use crate::domain::legislature::EntityKind;
use crate::domain::view::DetailContent;

/// Monotonic counter of navigation transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Tracks which single section is visible and what the detail slot holds.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    active: Section,
    /// List whose navigation affordance is highlighted.
    active_nav: Option<EntityKind>,
    /// List that was visible before detail mode was entered.
    return_to: Option<EntityKind>,
    detail: Option<DetailContent>,
    generation: Generation,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows only the list for `kind`, highlights its affordance and clears
    /// the detail slot.
    pub fn select_section(&mut self, kind: EntityKind) -> Generation {
        self.move_to(Section::list(kind));
        self.active_nav = Some(kind);
        self.return_to = Some(kind);
        self.detail = None;
        self.generation
    }

    /// Hides every list and shows `content` in the detail slot.
    pub fn enter_detail(&mut self, content: DetailContent) -> Generation {
        if let Some(kind) = self.active.list_kind() {
            self.return_to = Some(kind);
        }
        self.move_to(Section::Detail);
        self.detail = Some(content);
        self.generation
    }

    /// Hides the detail slot and re-shows the list that preceded it.
    ///
    /// Falls back to the proposals list when detail mode was entered before
    /// any list had been shown. A no-op outside detail mode.
    pub fn exit_detail(&mut self) -> Generation {
        if self.active != Section::Detail {
            return self.generation;
        }
        let kind = self.return_to.unwrap_or(EntityKind::Proposal);
        self.move_to(Section::list(kind));
        self.detail = None;
        self.generation
    }

    /// Swaps the detail slot contents in place without a transition.
    ///
    /// Returns false (and discards `content`) when detail mode is not active.
    pub fn replace_detail(&mut self, content: DetailContent) -> bool {
        if self.active != Section::Detail {
            return false;
        }
        self.detail = Some(content);
        true
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn active_nav(&self) -> Option<EntityKind> {
        self.active_nav
    }

    pub fn detail(&self) -> Option<&DetailContent> {
        self.detail.as_ref()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        section.is_visible() && self.active == section
    }

    /// Sections currently shown; never more than one.
    pub fn visible_sections(&self) -> Vec<Section> {
        Section::VISIBLE
            .into_iter()
            .filter(|s| self.is_visible(*s))
            .collect()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns true if no transition happened since `ticket` was issued.
    pub fn is_current(&self, ticket: Generation) -> bool {
        self.generation == ticket
    }

    fn move_to(&mut self, target: Section) {
        match self.active.transition_to(target) {
            Ok(next) => {
                self.active = next;
                self.generation = self.generation.next();
            }
            Err(err) => {
                tracing::warn!(from = %self.active, to = %target, error = %err, "Rejected section change");
            }
        }
    }
}
