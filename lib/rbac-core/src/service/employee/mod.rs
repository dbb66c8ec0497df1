use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::repository::employee_repository::EmployeeRepository;

pub mod dto;
pub mod service;

pub(crate) mod validator;

#[derive(Clone)]
pub struct EmployeeService {
    employee_repository: Arc<dyn EmployeeRepository>,
    config: Arc<CoreConfig>,
}

impl EmployeeService {
    pub fn new(employee_repository: Arc<dyn EmployeeRepository>, config: Arc<CoreConfig>) -> Self {
        Self {
            employee_repository,
            config,
        }
    }
}
