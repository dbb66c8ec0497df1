use shared_types::OrganisationId;

use super::dto::{CreateOrganisationRequestDTO, UpdateOrganisationRequestDTO};
use crate::common_validator::validate_name;
use crate::config::core_config::CoreConfig;
use crate::model::organisation::{CreateOrganisationRequest, UpdateOrganisationRequest};
use crate::service::error::ValidationError;

pub(super) fn validate_create_request(
    request: CreateOrganisationRequestDTO,
    config: &CoreConfig,
) -> Result<CreateOrganisationRequest, ValidationError> {
    Ok(CreateOrganisationRequest {
        name: validate_name("name", request.name, &config.validation)?,
    })
}

pub(super) fn validate_update_request(
    id: OrganisationId,
    request: UpdateOrganisationRequestDTO,
    config: &CoreConfig,
) -> Result<UpdateOrganisationRequest, ValidationError> {
    Ok(UpdateOrganisationRequest {
        id,
        name: validate_name("name", request.name, &config.validation)?,
    })
}
