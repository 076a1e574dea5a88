use std::{error::Error, fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, header};
use tracing::{debug, warn};
use url::Url;

use crate::admin_roles::{
    domain::model::{
        entities::role_assignment::RoleAssignment,
        enums::admin_role_type::AdminRoleType,
        value_objects::{assignment_id::AssignmentId, target::Target},
    },
    infrastructure::okta::{
        clients::role_assignment_client::{OktaApiError, RoleAssignmentClient},
        resources::okta_role_resource::{
            AssignOktaRoleRequestResource, OktaErrorResource, OktaRoleResource,
        },
    },
};

/// Talks to `/api/v1/{users|groups}/{id}/roles` with an SSWS API token.
pub struct ReqwestRoleAssignmentClientImpl {
    client: Client,
    base_url: Url,
    api_token: String,
}

impl fmt::Debug for ReqwestRoleAssignmentClientImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestRoleAssignmentClientImpl")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ReqwestRoleAssignmentClientImpl {
    pub fn new(base_url: &str, api_token: String, timeout: Duration) -> Result<Self, OktaApiError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            OktaApiError::InvalidRequest(format!("invalid org url '{base_url}': {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(OktaApiError::InvalidRequest(format!(
                "org url '{base_url}' cannot carry an api path"
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                OktaApiError::InvalidRequest(format!("failed to build http client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url,
            api_token,
        })
    }

    fn roles_url(
        &self,
        target: &Target,
        assignment_id: Option<&AssignmentId>,
    ) -> Result<Url, OktaApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                OktaApiError::InvalidRequest("org url cannot carry an api path".to_string())
            })?;
            segments.pop_if_empty().extend([
                "api",
                "v1",
                target.target_type().as_str(),
                target.target_id().value(),
                "roles",
            ]);
            if let Some(assignment_id) = assignment_id {
                segments.push(assignment_id.value());
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("SSWS {}", self.api_token))
            .header(header::ACCEPT, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, OktaApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| OktaApiError::Transport(error_chain(&e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = serde_json::from_str::<OktaErrorResource>(&body).unwrap_or_default();
        warn!(
            status = status.as_u16(),
            error_code = ?error.error_code,
            "okta rejected role request"
        );

        let summary = match error.error_summary {
            Some(summary) => summary,
            None if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
            None => body,
        };

        Err(OktaApiError::Status {
            status: status.as_u16(),
            error_code: error.error_code,
            summary,
        })
    }
}

#[async_trait]
impl RoleAssignmentClient for ReqwestRoleAssignmentClientImpl {
    async fn list_roles(&self, target: &Target) -> Result<Vec<RoleAssignment>, OktaApiError> {
        let url = self.roles_url(target, None)?;
        debug!(%url, "listing role assignments");

        let roles = self
            .send(self.request(Method::GET, url))
            .await?
            .json::<Vec<OktaRoleResource>>()
            .await
            .map_err(|e| OktaApiError::Decode(e.to_string()))?;

        roles.into_iter().map(RoleAssignment::try_from).collect()
    }

    async fn add_role(
        &self,
        target: &Target,
        role_type: AdminRoleType,
    ) -> Result<RoleAssignment, OktaApiError> {
        let url = self.roles_url(target, None)?;
        debug!(%url, role_type = role_type.as_str(), "assigning role");

        let request = self
            .request(Method::POST, url)
            .json(&AssignOktaRoleRequestResource {
                role_type: role_type.as_str(),
            });

        let role = self
            .send(request)
            .await?
            .json::<OktaRoleResource>()
            .await
            .map_err(|e| OktaApiError::Decode(e.to_string()))?;

        RoleAssignment::try_from(role)
    }

    async fn remove_role(
        &self,
        target: &Target,
        assignment_id: &AssignmentId,
    ) -> Result<(), OktaApiError> {
        let url = self.roles_url(target, Some(assignment_id))?;
        debug!(%url, "removing role assignment");

        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

/// `reqwest` keeps the underlying cause out of its own message, so the whole
/// source chain is joined.
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
