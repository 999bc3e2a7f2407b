//! RenderDetailHandler - Query handler that renders one entity for the
//! detail slot.

use crate::application::ApiClient;
use crate::domain::legislature::{DebateDetail, MemberDetail, PartyDetail, ProposalDetail};
use crate::domain::view::{
    Action, ActionTable, Badge, DebateDetailView, DebateEntryView, DetailContent, DetailTarget,
    LinkedItem, MemberDetailView, PartyDetailView, ProposalDetailView, Rendered, VoteResultsView,
};
use crate::ports::ApiFailure;

/// Handler that fetches one entity and builds its detail view.
#[derive(Clone)]
pub struct RenderDetailHandler {
    api: ApiClient,
}

impl RenderDetailHandler {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetches and renders `target`. A failure leaves rendering to the
    /// caller, which must not change view state.
    pub async fn handle(&self, target: DetailTarget) -> Result<Rendered<DetailContent>, ApiFailure> {
        let rendered = match target {
            DetailTarget::Proposal(id) => {
                proposal_detail(&self.api.get_proposal(id).await?).map(DetailContent::Proposal)
            }
            DetailTarget::Party(id) => {
                party_detail(&self.api.get_party(id).await?).map(DetailContent::Party)
            }
            DetailTarget::Member(id) => {
                member_detail(&self.api.get_member(id).await?).map(DetailContent::Member)
            }
            DetailTarget::Debate(id) => {
                debate_detail(&self.api.get_debate(id).await?).map(DetailContent::Debate)
            }
        };
        Ok(rendered)
    }
}

/// Maps a proposal's lifecycle to presentation and available actions.
pub fn proposal_detail(proposal: &ProposalDetail) -> Rendered<ProposalDetailView> {
    let mut actions = ActionTable::new();

    let start_simulation = proposal
        .status
        .can_start_simulation()
        .then(|| actions.bind(Action::StartSimulation { proposal_id: proposal.id }));
    let check_progress = proposal
        .status
        .is_simulation_running()
        .then(|| actions.bind(Action::CheckProgress { proposal_id: proposal.id }));

    let vote_results = proposal.votes_summary.map(|votes| VoteResultsView {
        total: votes.total,
        for_votes: votes.for_votes,
        against_votes: votes.against_votes,
        abstain_votes: votes.abstain_votes,
        absent_votes: votes.absent_votes,
        result: Badge::vote_result(votes.passed),
    });

    let view = ProposalDetailView {
        id: proposal.id,
        title: proposal.title.clone(),
        status_badge: Badge::for_status(&proposal.status),
        proposer: proposal.proposer_line(),
        submitted: proposal.submitted_date.display_string(),
        vote_date: proposal.vote_date.as_ref().map(|d| d.display_string()),
        content: proposal.content.clone(),
        vote_results,
        start_simulation,
        check_progress,
        progress: None,
    };
    Rendered::new(view, actions)
}

pub fn party_detail(party: &PartyDetail) -> Rendered<PartyDetailView> {
    let mut actions = ActionTable::new();
    let members = party
        .members
        .iter()
        .map(|member| LinkedItem {
            label: match &member.role {
                Some(role) => format!("{} - {}", member.name, role),
                None => member.name.clone(),
            },
            action: actions.bind(Action::ViewDetail {
                target: DetailTarget::Member(member.id),
            }),
        })
        .collect();

    let view = PartyDetailView {
        id: party.id,
        name: party.name.clone(),
        abbreviation: party.abbreviation.clone(),
        ideology: party.ideology.clone(),
        members,
    };
    Rendered::new(view, actions)
}

pub fn member_detail(member: &MemberDetail) -> Rendered<MemberDetailView> {
    let view = MemberDetailView {
        id: member.id,
        name: member.name.clone(),
        party: format!("{} ({})", member.party.name, member.party.abbreviation),
        role: member.role.clone(),
        career: [&member.career, &member.career2]
            .into_iter()
            .flatten()
            .filter(|line| !line.trim().is_empty())
            .cloned()
            .collect(),
        education: member.education.clone(),
    };
    Rendered::new(view, ActionTable::new())
}

pub fn debate_detail(debate: &DebateDetail) -> Rendered<DebateDetailView> {
    let mut actions = ActionTable::new();

    let label = debate
        .proposal
        .as_ref()
        .and_then(|p| p.title.clone())
        .unwrap_or_else(|| format!("Proposal {}", debate.proposal_id));
    let proposal = LinkedItem {
        label,
        action: actions.bind(Action::ViewDetail {
            target: DetailTarget::Proposal(debate.proposal_id),
        }),
    };

    let entries = debate
        .entries
        .iter()
        .map(|entry| DebateEntryView {
            speaker: entry.speaker(),
            timestamp: entry.timestamp.display_string(),
            content: entry.content.clone(),
        })
        .collect();

    let view = DebateDetailView {
        id: debate.id,
        title: debate.title.clone(),
        date: debate.date.as_ref().map(|d| d.display_string()),
        proposal,
        entries,
    };
    Rendered::new(view, actions)
}
