use httpmock::prelude::*;
use server::contact::{
    ContactDraft, ContactField, ContactFlow, EmailJsTransport, MessageTransport, SubmissionState,
    SubmissionTicket, SubmitError, TransportConfig, TransportError,
};
use std::time::Duration;

fn config_for(url: String) -> TransportConfig {
    TransportConfig::new("service_abc", "template_xyz", "public_key")
        .with_endpoint(url)
        .with_timeout(Duration::from_secs(2))
}

fn valid_ticket() -> SubmissionTicket {
    SubmissionTicket::new(ContactDraft::new(
        "Alice",
        "alice@example.com",
        "Hello, I would like to talk about a project.",
    ))
}

#[tokio::test]
async fn test_success_status_is_delivered() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1.0/email/send")
                .header("content-type", "application/json")
                .body_contains("\"service_id\":\"service_abc\"")
                .body_contains("\"template_id\":\"template_xyz\"")
                .body_contains("\"user_id\":\"public_key\"")
                .body_contains("alice@example.com");
            then.status(200).body("OK");
        })
        .await;

    let transport = EmailJsTransport::new(config_for(server.url("/api/v1.0/email/send"))).unwrap();
    let result = transport.deliver(&valid_ticket()).await;

    assert_eq!(result, Ok(()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_rejected_with_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/send");
            then.status(500).body("internal error");
        })
        .await;

    let transport = EmailJsTransport::new(config_for(server.url("/send"))).unwrap();
    let result = transport.deliver(&valid_ticket()).await;

    assert_eq!(
        result,
        Err(TransportError::Rejected {
            status: 500,
            body: "internal error".to_string()
        })
    );
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Port 9 (discard) is closed on test machines
    let transport = EmailJsTransport::new(config_for("http://127.0.0.1:9/send".to_string())).unwrap();

    let result = transport.deliver(&valid_ticket()).await;

    assert!(
        matches!(
            result,
            Err(TransportError::Network { .. }) | Err(TransportError::Timeout { .. })
        ),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn test_flow_clears_draft_only_after_delivery() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/send");
            then.status(200);
        })
        .await;
    let transport = EmailJsTransport::new(config_for(server.url("/send"))).unwrap();

    let mut flow = ContactFlow::default();
    flow.edit(ContactField::Name, "Al");
    flow.edit(ContactField::Email, "a@b.com");
    flow.edit(ContactField::Message, "1234567890");

    flow.submit(&transport).await.unwrap();

    assert!(flow.draft().is_empty());
    assert!(matches!(flow.state(), SubmissionState::Sent { .. }));
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_rejected_delivery_keeps_draft() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/send");
            then.status(403).body("forbidden");
        })
        .await;
    let transport = EmailJsTransport::new(config_for(server.url("/send"))).unwrap();

    let mut flow = ContactFlow::default();
    flow.edit(ContactField::Name, "Alice");
    flow.edit(ContactField::Email, "alice@example.com");
    flow.edit(ContactField::Message, "Hello there, friend");
    let before = flow.draft().clone();

    let result = flow.submit(&transport).await;

    assert!(matches!(
        result,
        Err(SubmitError::Transport(TransportError::Rejected { status: 403, .. }))
    ));
    assert_eq!(flow.draft(), &before);
    assert_eq!(flow.state(), SubmissionState::Failed);
    mock.assert_hits_async(1).await;
}
