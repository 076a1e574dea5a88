pub mod admin_roles_error_response_resource;
pub mod admin_roles_resource;
pub mod admin_roles_target_request_resource;
pub mod apply_admin_roles_request_resource;
pub mod import_admin_roles_request_resource;
