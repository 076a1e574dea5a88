use std::fmt;

use crate::admin_roles::domain::model::{
    enums::{admin_roles_domain_error::AdminRolesDomainError, target_type::TargetType},
    value_objects::target_id::TargetId,
};

/// User or group that admin roles are assigned to.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Target {
    target_type: TargetType,
    target_id: TargetId,
}

impl Target {
    pub fn new(target_type: &str, target_id: String) -> Result<Self, AdminRolesDomainError> {
        Ok(Self {
            target_type: target_type.parse()?,
            target_id: TargetId::new(target_id)?,
        })
    }

    pub fn user(target_id: TargetId) -> Self {
        Self {
            target_type: TargetType::User,
            target_id,
        }
    }

    pub fn group(target_id: TargetId) -> Self {
        Self {
            target_type: TargetType::Group,
            target_id,
        }
    }

    /// Parses an import id of the form `<target_type>/<target_id>`.
    pub fn from_import_id(import_id: &str) -> Result<Self, AdminRolesDomainError> {
        let invalid = || AdminRolesDomainError::InvalidImportId(import_id.to_string());

        let (target_type, target_id) = import_id.trim().split_once('/').ok_or_else(invalid)?;
        if target_id.contains('/') {
            return Err(invalid());
        }

        Self::new(target_type, target_id.to_string())
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn target_id(&self) -> &TargetId {
        &self.target_id
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.target_type, self.target_id.value())
    }
}
