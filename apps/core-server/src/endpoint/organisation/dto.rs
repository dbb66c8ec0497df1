use one_dto_mapper::From;
use rbac_core::service::organisation::dto::GetOrganisationDetailsResponseDTO;
use serde::{Deserialize, Serialize};
use shared_types::OrganisationId;
use utoipa::ToSchema;

use crate::deserialize::TextInput;

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub(crate) struct CreateOrganisationRequestRestDTO {
    #[schema(value_type = Option<String>, example = "Acme")]
    pub name: Option<TextInput>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub(crate) struct UpdateOrganisationRequestRestDTO {
    #[schema(value_type = Option<String>, example = "Acme Corp")]
    pub name: Option<TextInput>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(GetOrganisationDetailsResponseDTO)]
pub(crate) struct OrganisationResponseRestDTO {
    #[schema(value_type = i32, example = 1)]
    pub id: OrganisationId,
    pub name: String,
}
