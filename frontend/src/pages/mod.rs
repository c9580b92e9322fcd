pub mod certificates;
pub mod login;
pub mod students;
