use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::admin_roles::domain::services::admin_roles_query_service::AdminRolesState;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AdminRolesResource {
    pub id: String,
    pub target_id: String,
    pub target_type: String,
    pub admin_roles: Vec<String>,
}

impl From<AdminRolesState> for AdminRolesResource {
    fn from(state: AdminRolesState) -> Self {
        Self {
            id: state.id,
            target_id: state.target_id,
            target_type: state.target_type.as_str().to_string(),
            admin_roles: state.admin_roles.into_iter().collect(),
        }
    }
}
