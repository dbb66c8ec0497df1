use axum::Extension;
use axum::extract::{Path, Request, State};
use axum_extra::extract::WithRejection;
use rbac_core::model::role::Role;
use rbac_core::service::organisation::dto::{
    CreateOrganisationRequestDTO, UpdateOrganisationRequestDTO,
};
use shared_types::OrganisationId;

use super::dto::{
    CreateOrganisationRequestRestDTO, OrganisationResponseRestDTO,
    UpdateOrganisationRequestRestDTO,
};
use super::mapper::organisation_deleted;
use crate::dto::error::PathIdRejection;
use crate::dto::response::{CreatedOrErrorResponse, MessageResponseRestDTO, OkOrErrorResponse};
use crate::extractor::JsonOrForm;
use crate::middleware::Authorized;
use crate::permissions::role_check;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/organisation/{id}",
    responses(OkOrErrorResponse<OrganisationResponseRestDTO>),
    params(
        ("id" = i32, Path, description = "Organisation id")
    ),
    tag = "organisation_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve organisation",
    description = "Returns an organisation. Any verified caller may read it.",
)]
pub(crate) async fn get_organisation(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<OrganisationId>, PathIdRejection>,
) -> OkOrErrorResponse<OrganisationResponseRestDTO> {
    let result = state.core.organisation_service.get_organisation(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting organisation")
}

#[utoipa::path(
    post,
    path = "/organisation",
    request_body(content(
        (CreateOrganisationRequestRestDTO = "application/json", example = json!({ "name": "Acme" })),
        (CreateOrganisationRequestRestDTO = "application/x-www-form-urlencoded"),
    )),
    responses(CreatedOrErrorResponse<OrganisationResponseRestDTO>),
    tag = "organisation_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create organisation",
    description = "Creates an organisation. Requires the `admin` role.",
)]
pub(crate) async fn post_organisation(
    state: State<AppState>,
    Extension(authorized): Extension<Authorized>,
    request: Request,
) -> CreatedOrErrorResponse<OrganisationResponseRestDTO> {
    if let Err(error) = role_check(&authorized, state.core.role_guard.as_ref(), Role::Admin) {
        return error.into();
    }

    let body = match JsonOrForm::<CreateOrganisationRequestRestDTO>::parse(request).await {
        Ok(body) => body,
        Err(error) => return CreatedOrErrorResponse::Error(error.into()),
    };

    let result = match CreateOrganisationRequestDTO::try_from(body) {
        Ok(request) => {
            state
                .core
                .organisation_service
                .create_organisation(request)
                .await
        }
        Err(error) => Err(error),
    };
    CreatedOrErrorResponse::from_result(result, state, "creating organisation")
}

#[utoipa::path(
    put,
    path = "/organisation/{id}",
    request_body(content(
        (UpdateOrganisationRequestRestDTO = "application/json", example = json!({ "name": "Acme Corp" })),
        (UpdateOrganisationRequestRestDTO = "application/x-www-form-urlencoded"),
    )),
    responses(OkOrErrorResponse<OrganisationResponseRestDTO>),
    params(
        ("id" = i32, Path, description = "Organisation id")
    ),
    tag = "organisation_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update organisation",
    description = "Replaces the name of an organisation. Requires the `manager` role.",
)]
pub(crate) async fn put_organisation(
    state: State<AppState>,
    Extension(authorized): Extension<Authorized>,
    WithRejection(Path(id), _): WithRejection<Path<OrganisationId>, PathIdRejection>,
    request: Request,
) -> OkOrErrorResponse<OrganisationResponseRestDTO> {
    if let Err(error) = role_check(&authorized, state.core.role_guard.as_ref(), Role::Manager) {
        return error.into();
    }

    let body = match JsonOrForm::<UpdateOrganisationRequestRestDTO>::parse(request).await {
        Ok(body) => body,
        Err(error) => return OkOrErrorResponse::Error(error.into()),
    };

    let result = match UpdateOrganisationRequestDTO::try_from(body) {
        Ok(request) => {
            state
                .core
                .organisation_service
                .update_organisation(&id, request)
                .await
        }
        Err(error) => Err(error),
    };
    OkOrErrorResponse::from_result(result, state, "updating organisation")
}

#[utoipa::path(
    delete,
    path = "/organisation/{id}",
    responses(OkOrErrorResponse<MessageResponseRestDTO>),
    params(
        ("id" = i32, Path, description = "Organisation id")
    ),
    tag = "organisation_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete organisation",
    description = indoc::formatdoc! {"
        Deletes an organisation. Requires the `admin` role. Organisations which
        still have employees are not deleted.
    "},
)]
pub(crate) async fn delete_organisation(
    state: State<AppState>,
    Extension(authorized): Extension<Authorized>,
    WithRejection(Path(id), _): WithRejection<Path<OrganisationId>, PathIdRejection>,
) -> OkOrErrorResponse<MessageResponseRestDTO> {
    if let Err(error) = role_check(&authorized, state.core.role_guard.as_ref(), Role::Admin) {
        return error.into();
    }

    let result = state
        .core
        .organisation_service
        .delete_organisation(&id)
        .await
        .map(|_| organisation_deleted());
    OkOrErrorResponse::from_result(result, state, "deleting organisation")
}
