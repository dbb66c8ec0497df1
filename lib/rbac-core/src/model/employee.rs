use shared_types::{EmployeeId, OrganisationId};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub organisation_id: OrganisationId,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub organisation_id: OrganisationId,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateEmployeeRequest {
    pub id: EmployeeId,
    pub name: String,
    pub organisation_id: OrganisationId,
}
