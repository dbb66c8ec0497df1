use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::repository::organisation_repository::OrganisationRepository;

pub mod dto;
pub mod service;

pub(crate) mod validator;

#[derive(Clone)]
pub struct OrganisationService {
    organisation_repository: Arc<dyn OrganisationRepository>,
    config: Arc<CoreConfig>,
}

impl OrganisationService {
    pub fn new(
        organisation_repository: Arc<dyn OrganisationRepository>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            organisation_repository,
            config,
        }
    }
}
