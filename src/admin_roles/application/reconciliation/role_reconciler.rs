use std::{collections::BTreeSet, sync::Arc};

use tracing::{debug, info, instrument};

use crate::admin_roles::{
    domain::model::{
        entities::role_assignment::RoleAssignment,
        enums::{
            admin_role_type::AdminRoleType, admin_roles_domain_error::AdminRolesDomainError,
            role_operation::RoleOperation,
        },
        value_objects::{assignment_id::AssignmentId, target::Target},
    },
    infrastructure::okta::clients::role_assignment_client::RoleAssignmentClient,
};

/// Converges the admin roles of a single target onto a desired set.
///
/// Reconciling is a full replace: every current assignment is removed and
/// every desired role is then added, one call at a time. The first failing
/// call ends the run and nothing already done is rolled back, so a failed
/// reconcile can leave the target with a subset of its old or new roles.
///
/// Two reconciles for the same target must not run at the same time.
pub struct RoleReconciler {
    client: Arc<dyn RoleAssignmentClient>,
}

impl RoleReconciler {
    pub fn new(client: Arc<dyn RoleAssignmentClient>) -> Self {
        Self { client }
    }

    /// Checks every desired role against [`AdminRoleType`] and returns them in
    /// the order they will be assigned. Fails on the first unknown role.
    pub fn validate_roles(
        desired: &BTreeSet<String>,
    ) -> Result<Vec<AdminRoleType>, AdminRolesDomainError> {
        desired.iter().map(|role| role.parse()).collect()
    }

    pub async fn list_roles(
        &self,
        target: &Target,
    ) -> Result<Vec<RoleAssignment>, AdminRolesDomainError> {
        self.client
            .list_roles(target)
            .await
            .map_err(|e| remote_error(RoleOperation::Listing, target, e.to_string()))
    }

    pub async fn add_role(
        &self,
        target: &Target,
        role_type: AdminRoleType,
    ) -> Result<RoleAssignment, AdminRolesDomainError> {
        self.client
            .add_role(target, role_type)
            .await
            .map_err(|e| {
                remote_error(RoleOperation::Assigning, target, format!("{role_type}: {e}"))
            })
    }

    /// Any non-success answer fails, a 404 for an already missing assignment included.
    pub async fn remove_role(
        &self,
        target: &Target,
        assignment_id: &AssignmentId,
    ) -> Result<(), AdminRolesDomainError> {
        self.client
            .remove_role(target, assignment_id)
            .await
            .map_err(|e| {
                remote_error(
                    RoleOperation::Removing,
                    target,
                    format!("assignment {}: {e}", assignment_id.value()),
                )
            })
    }

    #[instrument(skip_all, fields(target = %target))]
    pub async fn remove_all_roles(&self, target: &Target) -> Result<(), AdminRolesDomainError> {
        let current = self.list_roles(target).await?;
        debug!(count = current.len(), "removing current role assignments");

        for assignment in &current {
            self.remove_role(target, assignment.assignment_id()).await?;
        }

        Ok(())
    }

    #[instrument(skip_all, fields(target = %target))]
    pub async fn reconcile(
        &self,
        target: &Target,
        desired: &BTreeSet<String>,
    ) -> Result<(), AdminRolesDomainError> {
        let roles = Self::validate_roles(desired)?;

        self.remove_all_roles(target).await?;

        for role_type in roles {
            let assignment = self.add_role(target, role_type).await?;
            debug!(
                role_type = assignment.role_type(),
                assignment_id = assignment.assignment_id().value(),
                "role assigned"
            );
        }

        info!(roles = desired.len(), "admin roles reconciled");
        Ok(())
    }

    pub async fn read_roles(
        &self,
        target: &Target,
    ) -> Result<BTreeSet<String>, AdminRolesDomainError> {
        Ok(self
            .list_roles(target)
            .await?
            .into_iter()
            .map(|assignment| assignment.role_type().to_string())
            .collect())
    }
}

fn remote_error(
    operation: RoleOperation,
    target: &Target,
    message: String,
) -> AdminRolesDomainError {
    AdminRolesDomainError::Remote {
        operation,
        target_type: target.target_type(),
        message,
    }
}
