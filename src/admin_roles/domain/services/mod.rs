pub mod admin_roles_command_service;
pub mod admin_roles_query_service;
