pub mod assignment_id;
pub mod target;
pub mod target_id;
