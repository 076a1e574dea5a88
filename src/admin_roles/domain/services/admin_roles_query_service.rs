use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::admin_roles::domain::model::{
    enums::{admin_roles_domain_error::AdminRolesDomainError, target_type::TargetType},
    queries::{
        import_admin_roles_query::ImportAdminRolesQuery,
        read_admin_roles_query::ReadAdminRolesQuery,
    },
    value_objects::target::Target,
};

/// Observed state of an `admin_roles` resource. The resource id is the target id.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminRolesState {
    pub id: String,
    pub target_id: String,
    pub target_type: TargetType,
    pub admin_roles: BTreeSet<String>,
}

impl AdminRolesState {
    pub fn new(target: &Target, admin_roles: BTreeSet<String>) -> Self {
        Self {
            id: target.target_id().value().to_string(),
            target_id: target.target_id().value().to_string(),
            target_type: target.target_type(),
            admin_roles,
        }
    }
}

#[async_trait]
pub trait AdminRolesQueryService: Send + Sync {
    async fn handle_read(
        &self,
        query: ReadAdminRolesQuery,
    ) -> Result<AdminRolesState, AdminRolesDomainError>;

    async fn handle_import(
        &self,
        query: ImportAdminRolesQuery,
    ) -> Result<AdminRolesState, AdminRolesDomainError>;
}
