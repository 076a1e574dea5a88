pub mod admin_roles_query_service_impl;
