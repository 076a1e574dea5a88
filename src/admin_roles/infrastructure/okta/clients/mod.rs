pub mod http;
pub mod role_assignment_client;
