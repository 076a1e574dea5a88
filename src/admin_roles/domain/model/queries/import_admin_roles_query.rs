use crate::admin_roles::domain::model::{
    enums::admin_roles_domain_error::AdminRolesDomainError, value_objects::target::Target,
};

#[derive(Clone, Debug)]
pub struct ImportAdminRolesQuery {
    target: Target,
}

impl ImportAdminRolesQuery {
    pub fn new(import_id: String) -> Result<Self, AdminRolesDomainError> {
        Ok(Self {
            target: Target::from_import_id(&import_id)?,
        })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}
