use autometrics::autometrics;
use one_dto_mapper::convert_inner;
use rbac_core::model::organisation::{
    CreateOrganisationRequest, Organisation, UpdateOrganisationRequest,
};
use rbac_core::repository::error::DataLayerError;
use rbac_core::repository::organisation_repository::OrganisationRepository;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use shared_types::OrganisationId;

use super::OrganisationProvider;
use crate::entity::{employee, organisation};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

#[autometrics]
#[async_trait::async_trait]
impl OrganisationRepository for OrganisationProvider {
    async fn create_organisation(
        &self,
        request: CreateOrganisationRequest,
    ) -> Result<Organisation, DataLayerError> {
        let organisation = organisation::ActiveModel::from(request)
            .insert(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(organisation.into())
    }

    async fn get_organisation(
        &self,
        id: &OrganisationId,
    ) -> Result<Option<Organisation>, DataLayerError> {
        let organisation = organisation::Entity::find_by_id(*id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(organisation))
    }

    async fn get_organisation_list(&self) -> Result<Vec<Organisation>, DataLayerError> {
        let organisations: Vec<organisation::Model> = organisation::Entity::find()
            .order_by_asc(organisation::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(organisations))
    }

    async fn update_organisation(
        &self,
        request: UpdateOrganisationRequest,
    ) -> Result<Organisation, DataLayerError> {
        let tx = self.db.begin().await.map_err(to_data_layer_error)?;

        let Some(current) = organisation::Entity::find_by_id(request.id)
            .one(&tx)
            .await
            .map_err(to_data_layer_error)?
        else {
            return Err(DataLayerError::RecordNotUpdated);
        };

        let mut model = current.into_active_model();
        model.name = Set(request.name);
        let updated = model
            .update(&tx)
            .await
            .map_err(to_update_data_layer_error)?;

        tx.commit().await.map_err(to_data_layer_error)?;

        Ok(updated.into())
    }

    async fn delete_organisation(&self, id: &OrganisationId) -> Result<(), DataLayerError> {
        let tx = self.db.begin().await.map_err(to_data_layer_error)?;

        if organisation::Entity::find_by_id(*id)
            .one(&tx)
            .await
            .map_err(to_data_layer_error)?
            .is_none()
        {
            return Err(DataLayerError::RecordNotUpdated);
        }

        let employees = employee::Entity::find()
            .filter(employee::Column::OrganisationId.eq(*id))
            .count(&tx)
            .await
            .map_err(to_data_layer_error)?;
        if employees > 0 {
            return Err(DataLayerError::StillReferenced);
        }

        let result = organisation::Entity::delete_by_id(*id)
            .exec(&tx)
            .await
            .map_err(to_data_layer_error)?;
        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        tx.commit().await.map_err(to_data_layer_error)?;

        Ok(())
    }
}
