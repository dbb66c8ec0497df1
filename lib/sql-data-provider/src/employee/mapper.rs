use rbac_core::model::employee::CreateEmployeeRequest;
use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;

use crate::entity::employee;

impl From<CreateEmployeeRequest> for employee::ActiveModel {
    fn from(value: CreateEmployeeRequest) -> Self {
        Self {
            id: NotSet,
            name: Set(value.name),
            organisation_id: Set(value.organisation_id),
        }
    }
}
