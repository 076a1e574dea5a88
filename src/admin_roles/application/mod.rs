pub mod command_services;
pub mod query_services;
pub mod reconciliation;
