use crate::admin_roles::domain::model::enums::admin_roles_domain_error::AdminRolesDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(value: String) -> Result<Self, AdminRolesDomainError> {
        if value.trim().is_empty() {
            return Err(AdminRolesDomainError::InvalidTargetId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
