use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::admin_roles::{
    application::reconciliation::role_reconciler::RoleReconciler,
    domain::{
        model::{
            commands::{
                apply_admin_roles_command::ApplyAdminRolesCommand,
                delete_admin_roles_command::DeleteAdminRolesCommand,
            },
            enums::admin_roles_domain_error::AdminRolesDomainError,
        },
        services::{
            admin_roles_command_service::AdminRolesCommandService,
            admin_roles_query_service::AdminRolesState,
        },
    },
};

pub struct AdminRolesCommandServiceImpl {
    reconciler: Arc<RoleReconciler>,
}

impl AdminRolesCommandServiceImpl {
    pub fn new(reconciler: Arc<RoleReconciler>) -> Self {
        Self { reconciler }
    }
}

#[async_trait]
impl AdminRolesCommandService for AdminRolesCommandServiceImpl {
    async fn handle_apply(
        &self,
        command: ApplyAdminRolesCommand,
    ) -> Result<AdminRolesState, AdminRolesDomainError> {
        let target = command.target();

        match command.admin_roles() {
            Some(desired) => self.reconciler.reconcile(target, desired).await?,
            None => debug!(%target, "admin_roles not set, leaving assignments untouched"),
        }

        let admin_roles = self.reconciler.read_roles(target).await?;
        Ok(AdminRolesState::new(target, admin_roles))
    }

    async fn handle_delete(
        &self,
        command: DeleteAdminRolesCommand,
    ) -> Result<(), AdminRolesDomainError> {
        self.reconciler.remove_all_roles(command.target()).await
    }
}
