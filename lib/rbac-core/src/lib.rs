use std::sync::Arc;

use config::core_config::CoreConfig;
use proto::role_guard::{ExactRoleGuard, RoleGuard};
use repository::DataRepository;
use service::employee::EmployeeService;
use service::organisation::OrganisationService;

pub mod common_validator;
pub mod config;
pub mod model;
pub mod proto;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct RbacCore {
    pub organisation_service: OrganisationService,
    pub employee_service: EmployeeService,
    pub role_guard: Arc<dyn RoleGuard>,
}

impl RbacCore {
    pub fn new(data_provider: Arc<dyn DataRepository>, config: CoreConfig) -> Self {
        Self::with_role_guard(data_provider, config, Arc::new(ExactRoleGuard))
    }

    pub fn with_role_guard(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
        role_guard: Arc<dyn RoleGuard>,
    ) -> Self {
        let config = Arc::new(config);

        Self {
            organisation_service: OrganisationService::new(
                data_provider.get_organisation_repository(),
                config.clone(),
            ),
            employee_service: EmployeeService::new(
                data_provider.get_employee_repository(),
                config,
            ),
            role_guard,
        }
    }
}
