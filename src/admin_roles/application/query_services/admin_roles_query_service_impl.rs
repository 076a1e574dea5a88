use std::sync::Arc;

use async_trait::async_trait;

use crate::admin_roles::{
    application::reconciliation::role_reconciler::RoleReconciler,
    domain::{
        model::{
            enums::admin_roles_domain_error::AdminRolesDomainError,
            queries::{
                import_admin_roles_query::ImportAdminRolesQuery,
                read_admin_roles_query::ReadAdminRolesQuery,
            },
            value_objects::target::Target,
        },
        services::admin_roles_query_service::{AdminRolesQueryService, AdminRolesState},
    },
};

pub struct AdminRolesQueryServiceImpl {
    reconciler: Arc<RoleReconciler>,
}

impl AdminRolesQueryServiceImpl {
    pub fn new(reconciler: Arc<RoleReconciler>) -> Self {
        Self { reconciler }
    }

    async fn read_state(&self, target: &Target) -> Result<AdminRolesState, AdminRolesDomainError> {
        let admin_roles = self.reconciler.read_roles(target).await?;
        Ok(AdminRolesState::new(target, admin_roles))
    }
}

#[async_trait]
impl AdminRolesQueryService for AdminRolesQueryServiceImpl {
    async fn handle_read(
        &self,
        query: ReadAdminRolesQuery,
    ) -> Result<AdminRolesState, AdminRolesDomainError> {
        self.read_state(query.target()).await
    }

    async fn handle_import(
        &self,
        query: ImportAdminRolesQuery,
    ) -> Result<AdminRolesState, AdminRolesDomainError> {
        self.read_state(query.target()).await
    }
}
