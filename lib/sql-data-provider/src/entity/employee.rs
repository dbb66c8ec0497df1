use one_dto_mapper::Into;
use rbac_core::model::employee::Employee;
use sea_orm::entity::prelude::*;
use shared_types::{EmployeeId, OrganisationId};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Into)]
#[into(Employee)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: EmployeeId,
    pub name: String,
    #[sea_orm(column_name = "organization_id")]
    pub organisation_id: OrganisationId,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organisation::Entity",
        from = "Column::OrganisationId",
        to = "super::organisation::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Organisation,
}

impl Related<super::organisation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organisation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
