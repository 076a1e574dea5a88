pub mod admin_roles_command_service_impl;
