use one_dto_mapper::From;
use rbac_core::service::employee::dto::GetEmployeeResponseDTO;
use serde::{Deserialize, Serialize};
use shared_types::{EmployeeId, OrganisationId};
use utoipa::ToSchema;

use crate::deserialize::{IntegerInput, TextInput};

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub(crate) struct EmployeeRequestRestDTO {
    #[schema(value_type = Option<String>, example = "Bob")]
    pub name: Option<TextInput>,
    /// Integer, or its decimal text in form bodies
    #[serde(rename = "organization_id")]
    #[schema(value_type = Option<i32>, example = 1)]
    pub organisation_id: Option<IntegerInput>,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[from(GetEmployeeResponseDTO)]
pub(crate) struct EmployeeResponseRestDTO {
    #[schema(value_type = i32, example = 1)]
    pub id: EmployeeId,
    pub name: String,
    #[serde(rename = "organization_id")]
    #[schema(value_type = i32, example = 1)]
    pub organisation_id: OrganisationId,
}
