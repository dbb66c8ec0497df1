use shared_types::{EmployeeId, OrganisationId};

use super::dto::{CreateEmployeeRequestDTO, UpdateEmployeeRequestDTO};
use crate::common_validator::validate_name;
use crate::config::core_config::CoreConfig;
use crate::model::employee::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::service::error::ValidationError;

// wire name of the reference, used in error messages
const ORGANISATION_FIELD: &str = "organization_id";

fn validate_organisation_id(
    organisation_id: Option<OrganisationId>,
) -> Result<OrganisationId, ValidationError> {
    organisation_id.ok_or(ValidationError::MissingField(ORGANISATION_FIELD))
}

pub(super) fn validate_create_request(
    request: CreateEmployeeRequestDTO,
    config: &CoreConfig,
) -> Result<CreateEmployeeRequest, ValidationError> {
    Ok(CreateEmployeeRequest {
        name: validate_name("name", request.name, &config.validation)?,
        organisation_id: validate_organisation_id(request.organisation_id)?,
    })
}

pub(super) fn validate_update_request(
    id: EmployeeId,
    request: UpdateEmployeeRequestDTO,
    config: &CoreConfig,
) -> Result<UpdateEmployeeRequest, ValidationError> {
    Ok(UpdateEmployeeRequest {
        id,
        name: validate_name("name", request.name, &config.validation)?,
        organisation_id: validate_organisation_id(request.organisation_id)?,
    })
}
