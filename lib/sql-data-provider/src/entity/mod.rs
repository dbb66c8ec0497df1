pub mod employee;
pub mod organisation;
