use shared_types::EmployeeId;

use super::EmployeeService;
use super::dto::{CreateEmployeeRequestDTO, GetEmployeeResponseDTO, UpdateEmployeeRequestDTO};
use super::validator::{validate_create_request, validate_update_request};
use crate::repository::error::DataLayerError;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

impl EmployeeService {
    /// Returns details of an employee
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an existing employee
    pub async fn get_employee(&self, id: &EmployeeId) -> Result<GetEmployeeResponseDTO, ServiceError> {
        let employee = self.employee_repository.get_employee(id).await?;

        let Some(employee) = employee else {
            return Err(EntityNotFoundError::Employee(*id).into());
        };

        Ok(employee.into())
    }

    /// Stores a new employee of an existing organisation
    pub async fn create_employee(
        &self,
        request: CreateEmployeeRequestDTO,
    ) -> Result<GetEmployeeResponseDTO, ServiceError> {
        let request = validate_create_request(request, &self.config)?;
        let organisation_id = request.organisation_id;

        let employee = self
            .employee_repository
            .create_employee(request)
            .await
            .map_err(|err| match err {
                DataLayerError::IncorrectParameters => {
                    ValidationError::UnknownOrganisation(organisation_id).into()
                }
                err => ServiceError::from(err),
            })?;

        tracing::info!(id = %employee.id, %organisation_id, "Created employee");
        Ok(employee.into())
    }

    /// Replaces name and organisation of an existing employee
    pub async fn update_employee(
        &self,
        id: &EmployeeId,
        request: UpdateEmployeeRequestDTO,
    ) -> Result<GetEmployeeResponseDTO, ServiceError> {
        let request = validate_update_request(*id, request, &self.config)?;
        let organisation_id = request.organisation_id;

        let employee = self
            .employee_repository
            .update_employee(request)
            .await
            .map_err(|err| match err {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Employee(*id).into(),
                DataLayerError::IncorrectParameters => {
                    ValidationError::UnknownOrganisation(organisation_id).into()
                }
                err => ServiceError::from(err),
            })?;

        tracing::info!(%id, "Updated employee");
        Ok(employee.into())
    }

    pub async fn delete_employee(&self, id: &EmployeeId) -> Result<(), ServiceError> {
        self.employee_repository
            .delete_employee(id)
            .await
            .map_err(|err| match err {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Employee(*id).into(),
                err => ServiceError::from(err),
            })?;

        tracing::info!(%id, "Deleted employee");
        Ok(())
    }
}
