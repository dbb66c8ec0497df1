use rbac_core::service::error::ServiceError;
use rbac_core::service::organisation::dto::{
    CreateOrganisationRequestDTO, UpdateOrganisationRequestDTO,
};

use super::dto::{CreateOrganisationRequestRestDTO, UpdateOrganisationRequestRestDTO};
use crate::deserialize::TextInput;
use crate::dto::response::MessageResponseRestDTO;

const NAME_FIELD: &str = "name";

impl TryFrom<CreateOrganisationRequestRestDTO> for CreateOrganisationRequestDTO {
    type Error = ServiceError;

    fn try_from(value: CreateOrganisationRequestRestDTO) -> Result<Self, Self::Error> {
        Ok(Self {
            name: TextInput::into_field(value.name, NAME_FIELD)?,
        })
    }
}

impl TryFrom<UpdateOrganisationRequestRestDTO> for UpdateOrganisationRequestDTO {
    type Error = ServiceError;

    fn try_from(value: UpdateOrganisationRequestRestDTO) -> Result<Self, Self::Error> {
        Ok(Self {
            name: TextInput::into_field(value.name, NAME_FIELD)?,
        })
    }
}

pub(crate) fn organisation_deleted() -> MessageResponseRestDTO {
    MessageResponseRestDTO::new("Organisation deleted")
}
