pub mod payments;
pub mod students;
