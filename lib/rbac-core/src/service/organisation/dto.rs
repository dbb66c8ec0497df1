use one_dto_mapper::From;
use shared_types::OrganisationId;

use crate::model::organisation::Organisation;

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Organisation)]
pub struct GetOrganisationDetailsResponseDTO {
    pub id: OrganisationId,
    pub name: String,
}

/// Fields are optional so that their absence is reported as a validation error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateOrganisationRequestDTO {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateOrganisationRequestDTO {
    pub name: Option<String>,
}
