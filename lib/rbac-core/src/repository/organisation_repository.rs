use shared_types::OrganisationId;

use super::error::DataLayerError;
use crate::model::organisation::{
    CreateOrganisationRequest, Organisation, UpdateOrganisationRequest,
};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait OrganisationRepository: Send + Sync {
    async fn create_organisation(
        &self,
        request: CreateOrganisationRequest,
    ) -> Result<Organisation, DataLayerError>;

    async fn get_organisation(
        &self,
        id: &OrganisationId,
    ) -> Result<Option<Organisation>, DataLayerError>;

    async fn get_organisation_list(&self) -> Result<Vec<Organisation>, DataLayerError>;

    /// Fails with [`DataLayerError::RecordNotUpdated`] when the organisation does not exist
    async fn update_organisation(
        &self,
        request: UpdateOrganisationRequest,
    ) -> Result<Organisation, DataLayerError>;

    /// Fails with [`DataLayerError::StillReferenced`] while employees belong to the organisation
    async fn delete_organisation(&self, id: &OrganisationId) -> Result<(), DataLayerError>;
}
