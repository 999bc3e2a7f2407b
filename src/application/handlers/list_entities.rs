//! ListEntitiesHandler - Query handler that renders one list section.

use crate::application::ApiClient;
use crate::domain::legislature::{Debate, EntityKind, Member, Party, ProposalSummary};
use crate::domain::view::{
    Action, ActionTable, Badge, DetailTarget, ListBody, ListRow, ListView, Rendered,
};
use crate::ports::ApiFailure;

/// Handler that fetches a collection and turns it into list rows.
#[derive(Clone)]
pub struct ListEntitiesHandler {
    api: ApiClient,
}

impl ListEntitiesHandler {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Renders the list for `kind`. Never fails: missing data yields the
    /// placeholder.
    pub async fn handle(&self, kind: EntityKind) -> Rendered<ListView> {
        match kind {
            EntityKind::Proposal => render_list(kind, self.api.list_proposals().await, proposal_row),
            EntityKind::Party => render_list(kind, self.api.list_parties().await, party_row),
            EntityKind::Member => render_list(kind, self.api.list_members().await, member_row),
            EntityKind::Debate => render_list(kind, self.api.list_debates().await, debate_row),
        }
    }
}

/// Builds a list view from a fetch result using `row` for each item.
///
/// A failure and an empty collection both produce exactly one placeholder.
pub fn render_list<T>(
    kind: EntityKind,
    result: Result<Vec<T>, ApiFailure>,
    row: impl Fn(&T, &mut ActionTable) -> ListRow,
) -> Rendered<ListView> {
    let items = match result {
        Ok(items) if !items.is_empty() => items,
        _ => return Rendered::new(ListView::placeholder(kind), ActionTable::new()),
    };

    let mut actions = ActionTable::new();
    let rows = items.iter().map(|item| row(item, &mut actions)).collect();
    Rendered::new(
        ListView {
            kind,
            body: ListBody::Rows(rows),
        },
        actions,
    )
}

pub fn proposal_row(proposal: &ProposalSummary, actions: &mut ActionTable) -> ListRow {
    ListRow {
        heading: proposal.title.clone(),
        badge: Some(Badge::list_status(&proposal.status)),
        subtitle: None,
        view_action: actions.bind(Action::ViewDetail {
            target: DetailTarget::Proposal(proposal.id),
        }),
    }
}

pub fn party_row(party: &Party, actions: &mut ActionTable) -> ListRow {
    ListRow {
        heading: format!("{} ({})", party.name, party.abbreviation),
        badge: None,
        subtitle: party.ideology.clone(),
        view_action: actions.bind(Action::ViewDetail {
            target: DetailTarget::Party(party.id),
        }),
    }
}

pub fn member_row(member: &Member, actions: &mut ActionTable) -> ListRow {
    ListRow {
        heading: member.name.clone(),
        badge: None,
        subtitle: Some(format!("Party ID: {}", member.party_id)),
        view_action: actions.bind(Action::ViewDetail {
            target: DetailTarget::Member(member.id),
        }),
    }
}

pub fn debate_row(debate: &Debate, actions: &mut ActionTable) -> ListRow {
    ListRow {
        heading: debate.title.clone(),
        badge: None,
        subtitle: Some(format!("Proposal ID: {}", debate.proposal_id)),
        view_action: actions.bind(Action::ViewDetail {
            target: DetailTarget::Debate(debate.id),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::MockTransport;
    use crate::domain::foundation::{DebateId, MemberId, PartyId, ProposalId};
    use crate::domain::legislature::ProposalStatus;
    use crate::ports::{Endpoint, HttpMethod};
    use proptest::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    fn handler(transport: MockTransport) -> ListEntitiesHandler {
        ListEntitiesHandler::new(ApiClient::new(Arc::new(transport)))
    }

    #[tokio::test]
    async fn failure_renders_single_placeholder_for_every_kind() {
        for kind in EntityKind::ALL {
            let transport = MockTransport::new().with_failure(
                HttpMethod::Get,
                Endpoint::Collection(kind),
                ApiFailure::transport("unreachable"),
            );
            let rendered = handler(transport).handle(kind).await;

            assert_eq!(rendered.view.placeholder_message(), Some(kind.empty_message()));
            assert!(rendered.view.rows().is_empty());
            assert!(rendered.actions.is_empty());
        }
    }

    #[tokio::test]
    async fn empty_collection_renders_placeholder() {
        let transport =
            MockTransport::new().with_get(Endpoint::Collection(EntityKind::Debate), json!([]));
        let rendered = handler(transport).handle(EntityKind::Debate).await;
        assert_eq!(rendered.view.placeholder_message(), Some("No debates found."));
    }

    #[tokio::test]
    async fn malformed_collection_renders_placeholder() {
        let transport = MockTransport::new()
            .with_get(Endpoint::Collection(EntityKind::Member), json!([{"id": "x"}]));
        let rendered = handler(transport).handle(EntityKind::Member).await;
        assert!(rendered.view.placeholder_message().is_some());
    }

    #[tokio::test]
    async fn proposals_render_title_and_raw_status() {
        let transport = MockTransport::new().with_get(
            Endpoint::Collection(EntityKind::Proposal),
            json!([{"id": 7, "title": "Climate Act", "content": "", "status": "debating"}]),
        );
        let rendered = handler(transport).handle(EntityKind::Proposal).await;

        let row = &rendered.view.rows()[0];
        assert_eq!(row.heading, "Climate Act");
        assert_eq!(row.badge.as_ref().map(|b| b.label.as_str()), Some("debating"));
        assert_eq!(
            rendered.actions.get(&row.view_action),
            Some(&Action::ViewDetail {
                target: DetailTarget::Proposal(ProposalId::new(7))
            })
        );
    }

    #[test]
    fn party_row_shows_abbreviation_and_ideology() {
        let mut actions = ActionTable::new();
        let row = party_row(
            &Party {
                id: PartyId::new(1),
                name: "Volkspartij".to_string(),
                abbreviation: "VP".to_string(),
                ideology: Some("Liberal".to_string()),
            },
            &mut actions,
        );
        assert_eq!(row.heading, "Volkspartij (VP)");
        assert_eq!(row.subtitle.as_deref(), Some("Liberal"));
    }

    #[test]
    fn member_and_debate_rows_reference_parent() {
        let mut actions = ActionTable::new();
        let member = member_row(
            &Member {
                id: MemberId::new(3),
                name: "Jan".to_string(),
                party_id: PartyId::new(1),
            },
            &mut actions,
        );
        let debate = debate_row(
            &Debate {
                id: DebateId::new(2),
                title: "First reading".to_string(),
                proposal_id: ProposalId::new(7),
                date: None,
            },
            &mut actions,
        );
        assert_eq!(member.subtitle.as_deref(), Some("Party ID: 1"));
        assert_eq!(debate.subtitle.as_deref(), Some("Proposal ID: 7"));
        assert_eq!(actions.len(), 2);
    }

    fn summaries(ids: &[i64]) -> Vec<ProposalSummary> {
        ids.iter()
            .map(|id| ProposalSummary {
                id: ProposalId::new(*id),
                title: format!("Proposal {}", id),
                status: ProposalStatus::Draft,
            })
            .collect()
    }

    proptest! {
        #[test]
        fn n_items_render_n_rows_each_wired_to_its_id(
            ids in proptest::collection::hash_set(1i64..10_000, 1..40)
        ) {
            let ids: Vec<i64> = ids.into_iter().collect();
            let rendered = render_list(EntityKind::Proposal, Ok(summaries(&ids)), proposal_row);

            prop_assert_eq!(rendered.view.rows().len(), ids.len());
            prop_assert!(rendered.view.placeholder_message().is_none());
            for (row, id) in rendered.view.rows().iter().zip(&ids) {
                let action = rendered.actions.get(&row.view_action);
                prop_assert_eq!(
                    action,
                    Some(&Action::ViewDetail { target: DetailTarget::Proposal(ProposalId::new(*id)) })
                );
            }
        }

        #[test]
        fn failures_never_render_rows(status in 100u16..600) {
            let rendered = render_list::<ProposalSummary>(
                EntityKind::Proposal,
                Err(ApiFailure::status(status, "")),
                proposal_row,
            );
            prop_assert!(rendered.view.rows().is_empty());
            prop_assert!(rendered.view.placeholder_message().is_some());
        }
    }
}
