use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{EmployeeId, OrganisationId};

use crate::entity::{employee, organisation};
use crate::{DataLayer, db_conn};

pub async fn insert_organisation_to_database(
    database: &DatabaseConnection,
    name: &str,
) -> Result<OrganisationId, DbErr> {
    let organisation = organisation::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(database)
    .await?;

    Ok(organisation.id)
}

pub async fn insert_employee_to_database(
    database: &DatabaseConnection,
    name: &str,
    organisation_id: OrganisationId,
) -> Result<EmployeeId, DbErr> {
    let employee = employee::ActiveModel {
        name: Set(name.to_owned()),
        organisation_id: Set(organisation_id),
        ..Default::default()
    }
    .insert(database)
    .await?;

    Ok(employee.id)
}

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let db_conn = db_conn(database_url, true).await.unwrap();
    DataLayer::build(db_conn)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}

