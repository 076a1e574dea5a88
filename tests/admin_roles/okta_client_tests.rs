use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use okta_admin_roles::admin_roles::{
    application::reconciliation::role_reconciler::RoleReconciler,
    domain::model::{
        entities::role_assignment::RoleAssignment,
        enums::{
            admin_role_type::AdminRoleType, admin_roles_domain_error::AdminRolesDomainError,
            role_operation::RoleOperation, target_type::TargetType,
        },
        value_objects::{assignment_id::AssignmentId, target::Target},
    },
    infrastructure::okta::clients::{
        http::reqwest_role_assignment_client_impl::ReqwestRoleAssignmentClientImpl,
        role_assignment_client::{OktaApiError, RoleAssignmentClient},
    },
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use crate::support::{GROUP_ID, USER_ID, desired, group_target, user_target};

const API_TOKEN: &str = "00test-token";

fn client_for(server: &MockServer) -> ReqwestRoleAssignmentClientImpl {
    ReqwestRoleAssignmentClientImpl::new(
        &server.uri(),
        API_TOKEN.to_string(),
        Duration::from_secs(5),
    )
    .expect("valid client")
}

fn group_roles_path() -> String {
    format!("/api/v1/groups/{GROUP_ID}/roles")
}

fn unreachable_client() -> ReqwestRoleAssignmentClientImpl {
    ReqwestRoleAssignmentClientImpl::new(
        "http://127.0.0.1:1",
        API_TOKEN.to_string(),
        Duration::from_secs(2),
    )
    .expect("valid client")
}

/// Forwards to the real client and records which operations were attempted.
struct RecordingClient {
    inner: ReqwestRoleAssignmentClientImpl,
    attempted: Mutex<Vec<&'static str>>,
}

impl RecordingClient {
    fn new(inner: ReqwestRoleAssignmentClientImpl) -> Self {
        Self {
            inner,
            attempted: Mutex::new(Vec::new()),
        }
    }

    fn attempted(&self) -> Vec<&'static str> {
        self.attempted.lock().expect("mutex poisoned").clone()
    }

    fn record(&self, operation: &'static str) {
        self.attempted.lock().expect("mutex poisoned").push(operation);
    }
}

#[async_trait]
impl RoleAssignmentClient for RecordingClient {
    async fn list_roles(&self, target: &Target) -> Result<Vec<RoleAssignment>, OktaApiError> {
        self.record("list");
        self.inner.list_roles(target).await
    }

    async fn add_role(
        &self,
        target: &Target,
        role_type: AdminRoleType,
    ) -> Result<RoleAssignment, OktaApiError> {
        self.record("add");
        self.inner.add_role(target, role_type).await
    }

    async fn remove_role(
        &self,
        target: &Target,
        assignment_id: &AssignmentId,
    ) -> Result<(), OktaApiError> {
        self.record("remove");
        self.inner.remove_role(target, assignment_id).await
    }
}

#[tokio::test]
async fn list_roles_sends_ssws_token_and_decodes_roles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/users/{USER_ID}/roles")))
        .and(header("Authorization", format!("SSWS {API_TOKEN}").as_str()))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "ra1", "type": "APP_ADMIN", "label": "Application Administrator", "status": "ACTIVE"},
            {"id": "ra2", "type": "USER_ADMIN", "label": "Group Administrator", "status": "ACTIVE"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let roles = client_for(&server)
        .list_roles(&user_target())
        .await
        .expect("list should succeed");

    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].role_type(), "APP_ADMIN");
    assert_eq!(roles[0].assignment_id().value(), "ra1");
    assert_eq!(roles[1].role_type(), "USER_ADMIN");
}

#[tokio::test]
async fn add_role_posts_role_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(group_roles_path()))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"type": "HELP_DESK_ADMIN"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": "ra9", "type": "HELP_DESK_ADMIN"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let assignment = client_for(&server)
        .add_role(&group_target(), AdminRoleType::HelpDeskAdmin)
        .await
        .expect("add should succeed");

    assert_eq!(assignment.role_type(), "HELP_DESK_ADMIN");
    assert_eq!(assignment.assignment_id().value(), "ra9");
}

#[tokio::test]
async fn remove_role_deletes_assignment_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/ra3", group_roles_path())))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .remove_role(
            &group_target(),
            &AssignmentId::new("ra3".to_string()).expect("valid assignment id"),
        )
        .await
        .expect("remove should succeed");
}

#[tokio::test]
async fn error_status_carries_okta_error_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(group_roles_path()))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errorCode": "E0000006",
            "errorSummary": "You do not have permission to perform the requested action",
            "errorLink": "E0000006",
            "errorId": "oaeXYZ",
            "errorCauses": []
        })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .add_role(&group_target(), AdminRoleType::SuperAdmin)
        .await
        .expect_err("add should fail");

    match error {
        OktaApiError::Status {
            status,
            error_code,
            summary,
        } => {
            assert_eq!(status, 403);
            assert_eq!(error_code.as_deref(), Some("E0000006"));
            assert!(summary.starts_with("You do not have permission"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_assignment_on_delete_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/gone", group_roles_path())))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .remove_role(
            &group_target(),
            &AssignmentId::new("gone".to_string()).expect("valid assignment id"),
        )
        .await
        .expect_err("remove should fail");

    assert!(matches!(error, OktaApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn malformed_role_list_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(group_roles_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"not": "a list"})))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .list_roles(&group_target())
        .await
        .expect_err("list should fail");

    assert!(matches!(error, OktaApiError::Decode(_)));
}

#[test]
fn client_rejects_unparseable_org_url() {
    let result = ReqwestRoleAssignmentClientImpl::new(
        "not a url",
        API_TOKEN.to_string(),
        Duration::from_secs(5),
    );

    assert!(matches!(result, Err(OktaApiError::InvalidRequest(_))));
}

#[tokio::test]
async fn reconcile_against_okta_issues_remove_then_adds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(group_roles_path()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": "r1", "type": "USER_ADMIN"}])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/r1", group_roles_path())))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(group_roles_path()))
        .and(body_json(json!({"type": "APP_ADMIN"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "r2", "type": "APP_ADMIN"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(group_roles_path()))
        .and(body_json(json!({"type": "READ_ONLY_ADMIN"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "r3", "type": "READ_ONLY_ADMIN"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let reconciler = RoleReconciler::new(Arc::new(client_for(&server)));

    reconciler
        .reconcile(&group_target(), &desired(&["APP_ADMIN", "READ_ONLY_ADMIN"]))
        .await
        .expect("reconcile should succeed");

    server.verify().await;
}

#[tokio::test]
async fn reconcile_with_invalid_role_never_reaches_okta() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let reconciler = RoleReconciler::new(Arc::new(client_for(&server)));

    let result = reconciler
        .reconcile(&group_target(), &desired(&["NOT_A_ROLE"]))
        .await;

    assert!(result.is_err());
    assert!(
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .is_empty()
    );
}

#[tokio::test]
async fn refused_connection_is_a_transport_error_with_its_cause() {
    let error = unreachable_client()
        .list_roles(&group_target())
        .await
        .expect_err("nothing listens on port 1");

    match error {
        OktaApiError::Transport(message) => {
            assert!(message.starts_with("error sending request"));
            assert!(message.to_lowercase().contains("connect"));
        }
        other => panic!("expected a transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn reconcile_aborts_when_okta_is_unreachable() {
    let client = Arc::new(RecordingClient::new(unreachable_client()));
    let reconciler = RoleReconciler::new(client.clone());

    let error = reconciler
        .reconcile(&group_target(), &desired(&["APP_ADMIN", "ORG_ADMIN"]))
        .await
        .expect_err("reconcile should fail");

    assert!(matches!(
        error,
        AdminRolesDomainError::Remote {
            operation: RoleOperation::Listing,
            target_type: TargetType::Group,
            ..
        }
    ));
    assert!(error.to_string().starts_with("error listing admin roles on groups: "));
    assert_eq!(client.attempted(), vec!["list"]);
}
