use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ImportAdminRolesRequestResource {
    /// `<target_type>/<target_id>`, e.g. `groups/00g1abcd`.
    #[validate(length(min = 3))]
    pub import_id: String,
}
