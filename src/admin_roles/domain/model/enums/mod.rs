pub mod admin_role_type;
pub mod admin_roles_domain_error;
pub mod role_operation;
pub mod target_type;
