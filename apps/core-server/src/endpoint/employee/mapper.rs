use rbac_core::service::employee::dto::{CreateEmployeeRequestDTO, UpdateEmployeeRequestDTO};
use rbac_core::service::error::{ServiceError, ValidationError};
use shared_types::OrganisationId;

use super::dto::EmployeeRequestRestDTO;
use crate::deserialize::{IntegerInput, TextInput};
use crate::dto::response::MessageResponseRestDTO;

const NAME_FIELD: &str = "name";
const ORGANISATION_FIELD: &str = "organization_id";

fn organisation_id(input: Option<IntegerInput>) -> Result<Option<OrganisationId>, ServiceError> {
    match input {
        None => Ok(None),
        Some(input) => input
            .valid()
            .map(|id| Some(id.into()))
            .ok_or(ValidationError::InvalidField(ORGANISATION_FIELD).into()),
    }
}

impl TryFrom<EmployeeRequestRestDTO> for CreateEmployeeRequestDTO {
    type Error = ServiceError;

    fn try_from(value: EmployeeRequestRestDTO) -> Result<Self, Self::Error> {
        Ok(Self {
            name: TextInput::into_field(value.name, NAME_FIELD)?,
            organisation_id: organisation_id(value.organisation_id)?,
        })
    }
}

impl TryFrom<EmployeeRequestRestDTO> for UpdateEmployeeRequestDTO {
    type Error = ServiceError;

    fn try_from(value: EmployeeRequestRestDTO) -> Result<Self, Self::Error> {
        Ok(Self {
            name: TextInput::into_field(value.name, NAME_FIELD)?,
            organisation_id: organisation_id(value.organisation_id)?,
        })
    }
}

pub(crate) fn employee_deleted() -> MessageResponseRestDTO {
    MessageResponseRestDTO::new("Employee deleted")
}
