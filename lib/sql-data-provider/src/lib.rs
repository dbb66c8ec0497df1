use std::sync::Arc;

use employee::EmployeeProvider;
use migration::{Migrator, MigratorTrait};
use organisation::OrganisationProvider;
use rbac_core::repository::DataRepository;
use rbac_core::repository::employee_repository::EmployeeRepository;
use rbac_core::repository::organisation_repository::OrganisationRepository;
use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};

pub mod employee;
pub mod entity;
pub mod organisation;

mod mapper;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utilities;

#[derive(Clone)]
pub struct DataLayer {
    // Used for tests for now
    #[allow(unused)]
    db: DatabaseConnection,
    organisation_repository: Arc<dyn OrganisationRepository>,
    employee_repository: Arc<dyn EmployeeRepository>,
}

impl DataLayer {
    pub fn build(db: DatabaseConnection) -> Self {
        Self {
            organisation_repository: Arc::new(OrganisationProvider { db: db.clone() }),
            employee_repository: Arc::new(EmployeeProvider { db: db.clone() }),
            db,
        }
    }
}

impl DataRepository for DataLayer {
    fn get_organisation_repository(&self) -> Arc<dyn OrganisationRepository> {
        self.organisation_repository.clone()
    }

    fn get_employee_repository(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repository.clone()
    }
}

/// Connects to the store and, if requested, brings the schema up to date.
///
/// Migrations only create what is missing, so running them against an
/// already initialized store is safe.
pub async fn db_conn(
    database_url: impl Into<String>,
    run_migrations: bool,
) -> Result<DatabaseConnection, DbErr> {
    let database_url = database_url.into();
    let in_memory = database_url.contains(":memory:");

    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);
    if in_memory {
        // every in-memory connection is a separate database
        options.max_connections(1).min_connections(1);
    }

    let db = sea_orm::Database::connect(options).await?;

    if run_migrations {
        Migrator::up(&db, None).await?;
        tracing::debug!("Database schema up to date");
    }

    Ok(db)
}
