pub mod employee_repository;
pub mod error;
pub mod organisation_repository;

use std::sync::Arc;

use employee_repository::EmployeeRepository;
use organisation_repository::OrganisationRepository;

pub trait DataRepository: Send + Sync {
    fn get_organisation_repository(&self) -> Arc<dyn OrganisationRepository>;
    fn get_employee_repository(&self) -> Arc<dyn EmployeeRepository>;
}
