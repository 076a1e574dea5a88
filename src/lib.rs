pub mod admin_roles;
pub mod config;
