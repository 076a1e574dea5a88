use crate::admin_roles::domain::model::enums::admin_roles_domain_error::AdminRolesDomainError;

/// Identifier Okta hands out for a single role assignment.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct AssignmentId(String);

impl AssignmentId {
    pub fn new(value: String) -> Result<Self, AdminRolesDomainError> {
        if value.trim().is_empty() {
            return Err(AdminRolesDomainError::InvalidAssignmentId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
