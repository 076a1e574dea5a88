pub mod import_admin_roles_query;
pub mod read_admin_roles_query;
