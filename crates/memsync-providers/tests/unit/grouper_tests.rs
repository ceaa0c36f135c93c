//! Tests for the Grouper membership provider against a mock server

use memsync_domain::Error;
use memsync_domain::ports::GroupMembershipProvider;
use memsync_domain::value_objects::{
    BatchOperation, Credentials, GroupQueryResult, MemberId, MembershipSet,
};
use memsync_providers::grouper::GrouperMembershipProvider;
use memsync_providers::http::{HttpClientConfig, build_http_client};
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;

const MEMBERS_PATH: &str = "/grouper-ws/servicesRest/json/v2_2_001/groups/patrons/members";
// base64("svc:secret")
const BASIC_AUTH: &str = "Basic c3ZjOnNlY3JldA==";

fn target(base_url: &str) -> GroupQueryResult {
    GroupQueryResult::new(
        "lib:patrons",
        format!("{base_url}{MEMBERS_PATH}"),
        Credentials::new("svc", "secret"),
        MembershipSet::new(),
    )
}

fn provider() -> GrouperMembershipProvider {
    let client = build_http_client(&HttpClientConfig::default()).expect("client builds");
    GrouperMembershipProvider::new(client)
}

fn ids(values: &[&str]) -> Vec<MemberId> {
    values.iter().copied().map(MemberId::from).collect()
}

#[tokio::test]
async fn test_add_batch_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", MEMBERS_PATH)
        .match_header("content-type", "text/x-json")
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::Json(json!({
            "WsRestAddMemberRequest": {
                "replaceAllExisting": "F",
                "subjectLookups": [{"subjectId": "alice"}, {"subjectId": "bob"}]
            }
        })))
        .with_status(201)
        .with_body(
            json!({"WsAddMemberResults": {"resultMetadata": {"resultCode": "SUCCESS"}}})
                .to_string(),
        )
        .create_async()
        .await;

    let code = provider()
        .submit_batch(
            BatchOperation::Add,
            &ids(&["alice", "bob"]),
            &target(&server.url()),
            Duration::from_secs(5),
        )
        .await
        .expect("request succeeds");

    assert_eq!(code, "SUCCESS");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_drop_batch_posts_delete_envelope() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", MEMBERS_PATH)
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::Json(json!({
            "WsRestDeleteMemberRequest": {
                "replaceAllExisting": "F",
                "subjectLookups": [{"subjectId": "carol"}]
            }
        })))
        .with_status(200)
        .with_body(
            json!({"WsDeleteMemberResults": {"resultMetadata": {"resultCode": "SUCCESS"}}})
                .to_string(),
        )
        .create_async()
        .await;

    let code = provider()
        .submit_batch(
            BatchOperation::Drop,
            &ids(&["carol"]),
            &target(&server.url()),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(code, "SUCCESS");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failure_code_in_error_response_is_returned() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", MEMBERS_PATH)
        .with_status(500)
        .with_body(
            json!({"WsDeleteMemberResults": {"resultMetadata": {
                "resultCode": "PROBLEM_DELETING_MEMBERS"
            }}})
            .to_string(),
        )
        .create_async()
        .await;

    let code = provider()
        .submit_batch(
            BatchOperation::Drop,
            &ids(&["carol"]),
            &target(&server.url()),
            Duration::from_secs(5),
        )
        .await
        .unwrap();

    assert_eq!(code, "PROBLEM_DELETING_MEMBERS");
}

#[tokio::test]
async fn test_missing_result_code_is_malformed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PUT", MEMBERS_PATH)
        .with_status(200)
        .with_body(json!({"WsAddMemberResults": {}}).to_string())
        .create_async()
        .await;

    let result = provider()
        .submit_batch(
            BatchOperation::Add,
            &ids(&["alice"]),
            &target(&server.url()),
            Duration::from_secs(5),
        )
        .await;

    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[tokio::test]
async fn test_results_envelope_must_match_operation() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PUT", MEMBERS_PATH)
        .with_status(200)
        .with_body(
            json!({"WsDeleteMemberResults": {"resultMetadata": {"resultCode": "SUCCESS"}}})
                .to_string(),
        )
        .create_async()
        .await;

    let result = provider()
        .submit_batch(
            BatchOperation::Add,
            &ids(&["alice"]),
            &target(&server.url()),
            Duration::from_secs(5),
        )
        .await;

    assert!(matches!(result, Err(Error::MalformedResponse { .. })));
}

#[tokio::test]
async fn test_non_json_error_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PUT", MEMBERS_PATH)
        .with_status(401)
        .with_body("Unauthorized")
        .create_async()
        .await;

    let result = provider()
        .submit_batch(
            BatchOperation::Add,
            &ids(&["alice"]),
            &target(&server.url()),
            Duration::from_secs(5),
        )
        .await;

    match result {
        Err(Error::Network { message, .. }) => {
            assert!(message.contains("authentication failed"));
            assert!(message.contains("Unauthorized"));
        }
        other => panic!("Expected Network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let result = provider()
        .submit_batch(
            BatchOperation::Add,
            &ids(&["alice"]),
            &target("http://127.0.0.1:1"),
            Duration::from_secs(5),
        )
        .await;

    assert!(matches!(result, Err(Error::Network { .. })));
}

#[test]
fn test_provider_name() {
    assert_eq!(provider().provider_name(), "grouper");
}
