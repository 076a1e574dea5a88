use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AdminRolesTargetRequestResource {
    #[validate(length(min = 1))]
    pub target_id: String,
    #[validate(length(min = 1))]
    pub target_type: String,
}
