use crate::admin_roles::domain::model::value_objects::assignment_id::AssignmentId;

/// A role granted to a target, as reported by Okta.
///
/// The role type is kept as the raw string Okta returns so that roles outside
/// the assignable set (custom or newer built-in roles) still show up when
/// reading and can still be removed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleAssignment {
    role_type: String,
    assignment_id: AssignmentId,
}

impl RoleAssignment {
    pub fn new(role_type: String, assignment_id: AssignmentId) -> Self {
        Self {
            role_type,
            assignment_id,
        }
    }

    pub fn role_type(&self) -> &str {
        &self.role_type
    }

    pub fn assignment_id(&self) -> &AssignmentId {
        &self.assignment_id
    }
}
