use async_trait::async_trait;

use crate::admin_roles::domain::model::{
    entities::role_assignment::RoleAssignment, enums::admin_role_type::AdminRoleType,
    value_objects::{assignment_id::AssignmentId, target::Target},
};

#[derive(Debug, thiserror::Error)]
pub enum OktaApiError {
    #[error("okta request could not be built: {0}")]
    InvalidRequest(String),

    #[error("okta request failed: {0}")]
    Transport(String),

    #[error("okta responded with status {status}: {summary}")]
    Status {
        status: u16,
        error_code: Option<String>,
        summary: String,
    },

    #[error("okta response could not be decoded: {0}")]
    Decode(String),
}

/// Role assignment endpoints of the Okta management API for one target.
#[async_trait]
pub trait RoleAssignmentClient: Send + Sync {
    async fn list_roles(&self, target: &Target) -> Result<Vec<RoleAssignment>, OktaApiError>;

    async fn add_role(
        &self,
        target: &Target,
        role_type: AdminRoleType,
    ) -> Result<RoleAssignment, OktaApiError>;

    async fn remove_role(
        &self,
        target: &Target,
        assignment_id: &AssignmentId,
    ) -> Result<(), OktaApiError>;
}
