use one_dto_mapper::From;
use shared_types::{EmployeeId, OrganisationId};

use crate::model::employee::Employee;

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Employee)]
pub struct GetEmployeeResponseDTO {
    pub id: EmployeeId,
    pub name: String,
    pub organisation_id: OrganisationId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateEmployeeRequestDTO {
    pub name: Option<String>,
    pub organisation_id: Option<OrganisationId>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateEmployeeRequestDTO {
    pub name: Option<String>,
    pub organisation_id: Option<OrganisationId>,
}
