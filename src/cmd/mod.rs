pub mod analyze;
pub mod search;
