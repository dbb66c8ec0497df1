use autometrics::autometrics;
use one_dto_mapper::convert_inner;
use rbac_core::model::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use rbac_core::repository::employee_repository::EmployeeRepository;
use rbac_core::repository::error::DataLayerError;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set,
    TransactionTrait,
};
use shared_types::{EmployeeId, OrganisationId};

use super::EmployeeProvider;
use crate::entity::{employee, organisation};
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

async fn ensure_organisation_exists(
    db: &impl ConnectionTrait,
    id: OrganisationId,
) -> Result<(), DataLayerError> {
    organisation::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(to_data_layer_error)?
        .map(|_| ())
        .ok_or(DataLayerError::IncorrectParameters)
}

#[autometrics]
#[async_trait::async_trait]
impl EmployeeRepository for EmployeeProvider {
    async fn create_employee(
        &self,
        request: CreateEmployeeRequest,
    ) -> Result<Employee, DataLayerError> {
        let tx = self.db.begin().await.map_err(to_data_layer_error)?;

        ensure_organisation_exists(&tx, request.organisation_id).await?;

        let employee = employee::ActiveModel::from(request)
            .insert(&tx)
            .await
            .map_err(to_data_layer_error)?;

        tx.commit().await.map_err(to_data_layer_error)?;

        Ok(employee.into())
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Option<Employee>, DataLayerError> {
        let employee = employee::Entity::find_by_id(*id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(employee))
    }

    async fn get_employee_list(&self) -> Result<Vec<Employee>, DataLayerError> {
        let employees: Vec<employee::Model> = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(convert_inner(employees))
    }

    async fn update_employee(
        &self,
        request: UpdateEmployeeRequest,
    ) -> Result<Employee, DataLayerError> {
        let tx = self.db.begin().await.map_err(to_data_layer_error)?;

        let Some(current) = employee::Entity::find_by_id(request.id)
            .one(&tx)
            .await
            .map_err(to_data_layer_error)?
        else {
            return Err(DataLayerError::RecordNotUpdated);
        };

        ensure_organisation_exists(&tx, request.organisation_id).await?;

        let mut model = current.into_active_model();
        model.name = Set(request.name);
        model.organisation_id = Set(request.organisation_id);
        let updated = model
            .update(&tx)
            .await
            .map_err(to_update_data_layer_error)?;

        tx.commit().await.map_err(to_data_layer_error)?;

        Ok(updated.into())
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<(), DataLayerError> {
        let tx = self.db.begin().await.map_err(to_data_layer_error)?;

        let result = employee::Entity::delete_by_id(*id)
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
