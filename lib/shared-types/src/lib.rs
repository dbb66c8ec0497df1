//! Identifier newtypes shared by every layer of the service.

mod macros;

mod employee_id;
mod organisation_id;

pub use employee_id::EmployeeId;
pub use organisation_id::OrganisationId;
