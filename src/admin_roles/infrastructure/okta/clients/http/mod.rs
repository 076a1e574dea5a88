pub mod reqwest_role_assignment_client_impl;
