use one_dto_mapper::Into;
use rbac_core::model::organisation::Organisation;
use sea_orm::entity::prelude::*;
use shared_types::OrganisationId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Into)]
#[into(Organisation)]
#[sea_orm(table_name = "organisation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: OrganisationId,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
