use shared_types::OrganisationId;

use super::OrganisationService;
use super::dto::{
    CreateOrganisationRequestDTO, GetOrganisationDetailsResponseDTO, UpdateOrganisationRequestDTO,
};
use super::validator::{validate_create_request, validate_update_request};
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl OrganisationService {
    /// Returns details of an organisation
    ///
    /// # Arguments
    ///
    /// * `id` - Id of an existing organisation
    pub async fn get_organisation(
        &self,
        id: &OrganisationId,
    ) -> Result<GetOrganisationDetailsResponseDTO, ServiceError> {
        let organisation = self.organisation_repository.get_organisation(id).await?;

        let Some(organisation) = organisation else {
            return Err(EntityNotFoundError::Organisation(*id).into());
        };

        Ok(organisation.into())
    }

    /// Validates the request and stores a new organisation, returning the stored record
    pub async fn create_organisation(
        &self,
        request: CreateOrganisationRequestDTO,
    ) -> Result<GetOrganisationDetailsResponseDTO, ServiceError> {
        let request = validate_create_request(request, &self.config)?;

        let organisation = self
            .organisation_repository
            .create_organisation(request)
            .await?;

        tracing::info!(id = %organisation.id, "Created organisation");
        Ok(organisation.into())
    }

    /// Replaces the name of an existing organisation
    pub async fn update_organisation(
        &self,
        id: &OrganisationId,
        request: UpdateOrganisationRequestDTO,
    ) -> Result<GetOrganisationDetailsResponseDTO, ServiceError> {
        let request = validate_update_request(*id, request, &self.config)?;

        let organisation = self
            .organisation_repository
            .update_organisation(request)
            .await
            .map_err(|err| match err {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Organisation(*id).into(),
                err => ServiceError::from(err),
            })?;

        tracing::info!(%id, "Updated organisation");
        Ok(organisation.into())
    }

    /// Removes an organisation. Organisations that still have employees are kept.
    pub async fn delete_organisation(&self, id: &OrganisationId) -> Result<(), ServiceError> {
        self.organisation_repository
            .delete_organisation(id)
            .await
            .map_err(|err| match err {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Organisation(*id).into(),
                DataLayerError::StillReferenced => {
                    BusinessLogicError::OrganisationHasEmployees(*id).into()
                }
                err => ServiceError::from(err),
            })?;

        tracing::info!(%id, "Deleted organisation");
        Ok(())
    }
}
