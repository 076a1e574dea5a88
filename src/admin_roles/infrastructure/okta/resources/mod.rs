pub mod okta_role_resource;
