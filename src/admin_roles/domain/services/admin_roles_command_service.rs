use async_trait::async_trait;

use crate::admin_roles::domain::{
    model::{
        commands::{
            apply_admin_roles_command::ApplyAdminRolesCommand,
            delete_admin_roles_command::DeleteAdminRolesCommand,
        },
        enums::admin_roles_domain_error::AdminRolesDomainError,
    },
    services::admin_roles_query_service::AdminRolesState,
};

#[async_trait]
pub trait AdminRolesCommandService: Send + Sync {
    async fn handle_apply(
        &self,
        command: ApplyAdminRolesCommand,
    ) -> Result<AdminRolesState, AdminRolesDomainError>;

    async fn handle_delete(
        &self,
        command: DeleteAdminRolesCommand,
    ) -> Result<(), AdminRolesDomainError>;
}
