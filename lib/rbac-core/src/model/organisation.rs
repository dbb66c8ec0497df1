use shared_types::OrganisationId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Organisation {
    pub id: OrganisationId,
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateOrganisationRequest {
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateOrganisationRequest {
    pub id: OrganisationId,
    pub name: String,
}
