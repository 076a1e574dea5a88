use thiserror::Error;

use super::{role_operation::RoleOperation, target_type::TargetType};

#[derive(Debug, Error)]
pub enum AdminRolesDomainError {
    #[error("target id is invalid")]
    InvalidTargetId,

    #[error("target type '{0}' is invalid, expected users or groups")]
    InvalidTargetType(String),

    #[error("{0} is not a valid Okta role")]
    InvalidRole(String),

    #[error("role assignment id is invalid")]
    InvalidAssignmentId,

    #[error("import id '{0}' is invalid, expected <target_type>/<target_id>")]
    InvalidImportId(String),

    #[error("error {operation} admin roles on {target_type}: {message}")]
    Remote {
        operation: RoleOperation,
        target_type: TargetType,
        message: String,
    },
}
