use crate::admin_roles::domain::model::{
    enums::admin_roles_domain_error::AdminRolesDomainError, value_objects::target::Target,
};

#[derive(Clone, Debug)]
pub struct ReadAdminRolesQuery {
    target: Target,
}

impl ReadAdminRolesQuery {
    pub fn new(target_type: String, target_id: String) -> Result<Self, AdminRolesDomainError> {
        Ok(Self {
            target: Target::new(&target_type, target_id)?,
        })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}
