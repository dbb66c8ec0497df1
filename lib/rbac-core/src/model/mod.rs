pub mod employee;
pub mod organisation;
pub mod role;
