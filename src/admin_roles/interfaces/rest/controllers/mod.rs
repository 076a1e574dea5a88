pub mod admin_roles_rest_controller;
