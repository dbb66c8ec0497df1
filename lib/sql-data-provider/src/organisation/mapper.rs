use rbac_core::model::organisation::CreateOrganisationRequest;
use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;

use crate::entity::organisation;

impl From<CreateOrganisationRequest> for organisation::ActiveModel {
    fn from(value: CreateOrganisationRequest) -> Self {
        Self {
            id: NotSet,
            name: Set(value.name),
        }
    }
}
