use shared_types::EmployeeId;

use super::error::DataLayerError;
use crate::model::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fails with [`DataLayerError::IncorrectParameters`] if the organisation does not exist
    async fn create_employee(
        &self,
        request: CreateEmployeeRequest,
    ) -> Result<Employee, DataLayerError>;

    async fn get_employee(&self, id: &EmployeeId) -> Result<Option<Employee>, DataLayerError>;

    async fn get_employee_list(&self) -> Result<Vec<Employee>, DataLayerError>;

    async fn update_employee(
        &self,
        request: UpdateEmployeeRequest,
    ) -> Result<Employee, DataLayerError>;

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), DataLayerError>;
}
