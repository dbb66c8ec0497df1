use rbac_core::repository::DataRepository;
use sea_orm::DatabaseConnection;
use sql_data_provider::DataLayer;

use self::employees::EmployeesDB;
use self::organisations::OrganisationsDB;

pub mod employees;

pub struct DbClient {
    pub organisations: OrganisationsDB,
    pub employees: EmployeesDB,
}

impl DbClient {
    pub fn new(db: DatabaseConnection) -> Self {
        let layer = DataLayer::build(db);
        Self {
            organisations: OrganisationsDB::new(layer.get_organisation_repository()),
            employees: EmployeesDB::new(layer.get_employee_repository()),
        }
    }
}
