use serde::{Deserialize, Serialize};

use crate::admin_roles::{
    domain::model::{
        entities::role_assignment::RoleAssignment, value_objects::assignment_id::AssignmentId,
    },
    infrastructure::okta::clients::role_assignment_client::OktaApiError,
};

#[derive(Debug, Clone, Deserialize)]
pub struct OktaRoleResource {
    pub id: String,
    #[serde(rename = "type")]
    pub role_type: String,
}

impl TryFrom<OktaRoleResource> for RoleAssignment {
    type Error = OktaApiError;

    fn try_from(resource: OktaRoleResource) -> Result<Self, Self::Error> {
        let assignment_id = AssignmentId::new(resource.id)
            .map_err(|e| OktaApiError::Decode(format!("{} role: {e}", resource.role_type)))?;
        Ok(RoleAssignment::new(resource.role_type, assignment_id))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignOktaRoleRequestResource<'a> {
    #[serde(rename = "type")]
    pub role_type: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OktaErrorResource {
    pub error_code: Option<String>,
    pub error_summary: Option<String>,
}
