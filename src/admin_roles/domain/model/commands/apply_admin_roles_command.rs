use std::collections::BTreeSet;

use crate::admin_roles::domain::model::{
    enums::admin_roles_domain_error::AdminRolesDomainError, value_objects::target::Target,
};

/// Create or update of an `admin_roles` resource.
///
/// `admin_roles: None` means the field was not set, in which case the remote
/// assignments are left as they are.
#[derive(Clone, Debug)]
pub struct ApplyAdminRolesCommand {
    target: Target,
    admin_roles: Option<BTreeSet<String>>,
}

impl ApplyAdminRolesCommand {
    pub fn new(
        target_type: String,
        target_id: String,
        admin_roles: Option<Vec<String>>,
    ) -> Result<Self, AdminRolesDomainError> {
        Ok(Self {
            target: Target::new(&target_type, target_id)?,
            admin_roles: admin_roles.map(|roles| roles.into_iter().collect()),
        })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn admin_roles(&self) -> Option<&BTreeSet<String>> {
        self.admin_roles.as_ref()
    }
}
