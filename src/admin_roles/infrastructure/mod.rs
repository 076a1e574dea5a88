pub mod okta;
