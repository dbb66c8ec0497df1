use std::sync::Arc;

use rbac_core::model::employee::{CreateEmployeeRequest, Employee};
use rbac_core::repository::employee_repository::EmployeeRepository;
use shared_types::{EmployeeId, OrganisationId};

pub struct EmployeesDB {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeesDB {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self, id: &EmployeeId) -> Option<Employee> {
        self.repository.get_employee(id).await.unwrap()
    }

    pub async fn create(&self, name: &str, organisation_id: OrganisationId) -> EmployeeId {
        self.repository
            .create_employee(CreateEmployeeRequest {
                name: name.to_owned(),
                organisation_id,
            })
            .await
            .unwrap()
            .id
    }

    pub async fn count(&self) -> usize {
        self.repository.get_employee_list().await.unwrap().len()
    }
}
