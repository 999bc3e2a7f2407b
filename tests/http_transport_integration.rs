//! Integration tests for the HTTP transport against a live fixture API.
//!
//! Verifies the exchange contract end to end:
//! 1. Paths are joined onto the configured base address
//! 2. Non-success statuses and malformed bodies become distinct failures
//! 3. POST bodies arrive as JSON

mod common;

use serde_json::json;
use std::sync::Arc;

use common::spawn_fixture_api;
use parliament_client::adapters::ReqwestTransport;
use parliament_client::application::ApiClient;
use parliament_client::config::ApiConfig;
use parliament_client::domain::foundation::{MemberId, ProposalId};
use parliament_client::domain::legislature::{EntityKind, NewProposal, ProposalStatus};
use parliament_client::ports::{ApiTransport, Endpoint, FailureKind};

fn transport(origin: &str) -> ReqwestTransport {
    ReqwestTransport::new(ApiConfig::new(origin)).unwrap()
}

#[tokio::test]
async fn test_collection_is_fetched_from_versioned_path() {
    let api = spawn_fixture_api().await;
    let client = ApiClient::new(Arc::new(transport(&api.origin)));

    let proposals = client.list_proposals().await.unwrap();

    let ids: Vec<i64> = proposals.iter().map(|p| p.id.value()).collect();
    assert_eq!(ids, vec![7, 8]);
    assert_eq!(proposals[1].status, ProposalStatus::Draft);
}

#[tokio::test]
async fn test_proposal_detail_decodes_embedded_records() {
    let api = spawn_fixture_api().await;
    let client = ApiClient::new(Arc::new(transport(&api.origin)));

    let proposal = client.get_proposal(ProposalId::new(7)).await.unwrap();

    assert_eq!(proposal.proposer_line(), "Anna de Vries (GL)");
    assert_eq!(proposal.votes_summary.map(|v| v.for_votes), Some(7));
}

#[tokio::test]
async fn test_not_found_is_status_failure() {
    let api = spawn_fixture_api().await;
    let transport = transport(&api.origin);

    let err = transport
        .get(&Endpoint::Proposal(ProposalId::new(99)))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Status);
}

#[tokio::test]
async fn test_server_error_is_status_failure() {
    let api = spawn_fixture_api().await;
    let err = transport(&api.origin)
        .get(&Endpoint::Collection(EntityKind::Party))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Status);
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_malformed_body_is_parse_failure() {
    let api = spawn_fixture_api().await;
    let err = transport(&api.origin)
        .get(&Endpoint::Collection(EntityKind::Debate))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Parse);
}

#[tokio::test]
async fn test_unexpected_structure_is_parse_failure() {
    let api = spawn_fixture_api().await;
    let client = ApiClient::new(Arc::new(transport(&api.origin)));

    // Valid JSON, but proposals are not member records.
    let err = client
        .fetch_one::<Vec<parliament_client::domain::legislature::Member>>(Endpoint::Collection(
            EntityKind::Proposal,
        ))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Parse);
}

#[tokio::test]
async fn test_create_proposal_posts_numeric_proposer() {
    let api = spawn_fixture_api().await;
    let client = ApiClient::new(Arc::new(transport(&api.origin)));

    let created = client
        .create_proposal(&NewProposal {
            title: "T".to_string(),
            content: "C".to_string(),
            proposer_id: MemberId::new(3),
        })
        .await
        .unwrap();

    assert_eq!(created.id, ProposalId::new(12));
    assert_eq!(
        api.received.bodies(),
        vec![(
            "/proposals/".to_string(),
            json!({"title": "T", "content": "C", "proposer_id": 3})
        )]
    );
}

#[tokio::test]
async fn test_start_simulation_posts_empty_object() {
    let api = spawn_fixture_api().await;
    let client = ApiClient::new(Arc::new(transport(&api.origin)));

    let ack = client.start_simulation(ProposalId::new(7)).await.unwrap();

    assert_eq!(ack.detail.as_deref(), Some("Simulation started for proposal 7"));
    assert_eq!(
        api.received.bodies(),
        vec![("/simulation/7/start".to_string(), json!({}))]
    );
}
