pub mod apply_admin_roles_command;
pub mod delete_admin_roles_command;
