pub mod employee;
pub mod misc;
pub mod organisation;
