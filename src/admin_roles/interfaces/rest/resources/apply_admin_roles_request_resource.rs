use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Desired configuration of an `admin_roles` resource.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ApplyAdminRolesRequestResource {
    /// Id of an existing user or group.
    #[validate(length(min = 1))]
    pub target_id: String,
    /// Either `users` or `groups`.
    #[validate(length(min = 1))]
    pub target_type: String,
    /// Okta admin roles, e.g. `["APP_ADMIN", "USER_ADMIN"]`. Omit to leave assignments untouched.
    #[serde(default)]
    pub admin_roles: Option<Vec<String>>,
}
