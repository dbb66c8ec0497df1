use axum::Extension;
use axum::extract::{Path, Request, State};
use axum_extra::extract::WithRejection;
use rbac_core::model::role::Role;
use rbac_core::service::employee::dto::{CreateEmployeeRequestDTO, UpdateEmployeeRequestDTO};
use shared_types::EmployeeId;

use super::dto::{EmployeeRequestRestDTO, EmployeeResponseRestDTO};
use super::mapper::employee_deleted;
use crate::dto::error::PathIdRejection;
use crate::dto::response::{CreatedOrErrorResponse, MessageResponseRestDTO, OkOrErrorResponse};
use crate::extractor::JsonOrForm;
use crate::middleware::Authorized;
use crate::permissions::role_check;
use crate::router::AppState;

#[utoipa::path(
    get,
    path = "/employee/{id}",
    responses(OkOrErrorResponse<EmployeeResponseRestDTO>),
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    tag = "employee_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve employee",
    description = "Returns an employee. Any verified caller may read it.",
)]
pub(crate) async fn get_employee(
    state: State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<EmployeeId>, PathIdRejection>,
) -> OkOrErrorResponse<EmployeeResponseRestDTO> {
    let result = state.core.employee_service.get_employee(&id).await;
    OkOrErrorResponse::from_result(result, state, "getting employee")
}

#[utoipa::path(
    post,
    path = "/employee",
    request_body(content(
        (EmployeeRequestRestDTO = "application/json", example = json!({ "name": "Bob", "organization_id": 1 })),
        (EmployeeRequestRestDTO = "application/x-www-form-urlencoded"),
    )),
    responses(CreatedOrErrorResponse<EmployeeResponseRestDTO>),
    tag = "employee_management",
    security(
        ("bearer" = [])
    ),
    summary = "Create employee",
    description = indoc::formatdoc! {"
        Creates an employee of an existing organisation. Requires the `admin` role.
    "},
)]
pub(crate) async fn post_employee(
    state: State<AppState>,
    Extension(authorized): Extension<Authorized>,
    request: Request,
) -> CreatedOrErrorResponse<EmployeeResponseRestDTO> {
    if let Err(error) = role_check(&authorized, state.core.role_guard.as_ref(), Role::Admin) {
        return error.into();
    }

    let body = match JsonOrForm::<EmployeeRequestRestDTO>::parse(request).await {
        Ok(body) => body,
        Err(error) => return CreatedOrErrorResponse::Error(error.into()),
    };

    let result = match CreateEmployeeRequestDTO::try_from(body) {
        Ok(request) => state.core.employee_service.create_employee(request).await,
        Err(error) => Err(error),
    };
    CreatedOrErrorResponse::from_result(result, state, "creating employee")
}

#[utoipa::path(
    put,
    path = "/employee/{id}",
    request_body(content(
        (EmployeeRequestRestDTO = "application/json", example = json!({ "name": "Robert", "organization_id": 1 })),
        (EmployeeRequestRestDTO = "application/x-www-form-urlencoded"),
    )),
    responses(OkOrErrorResponse<EmployeeResponseRestDTO>),
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    tag = "employee_management",
    security(
        ("bearer" = [])
    ),
    summary = "Update employee",
    description = "Replaces name and organisation of an employee. Requires the `manager` role.",
)]
pub(crate) async fn put_employee(
    state: State<AppState>,
    Extension(authorized): Extension<Authorized>,
    WithRejection(Path(id), _): WithRejection<Path<EmployeeId>, PathIdRejection>,
    request: Request,
) -> OkOrErrorResponse<EmployeeResponseRestDTO> {
    if let Err(error) = role_check(&authorized, state.core.role_guard.as_ref(), Role::Manager) {
        return error.into();
    }

    let body = match JsonOrForm::<EmployeeRequestRestDTO>::parse(request).await {
        Ok(body) => body,
        Err(error) => return OkOrErrorResponse::Error(error.into()),
    };

    let result = match UpdateEmployeeRequestDTO::try_from(body) {
        Ok(request) => state.core.employee_service.update_employee(&id, request).await,
        Err(error) => Err(error),
    };
    OkOrErrorResponse::from_result(result, state, "updating employee")
}

#[utoipa::path(
    delete,
    path = "/employee/{id}",
    responses(OkOrErrorResponse<MessageResponseRestDTO>),
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    tag = "employee_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete employee",
    description = "Deletes an employee. Requires the `admin` role.",
)]
pub(crate) async fn delete_employee(
    state: State<AppState>,
    Extension(authorized): Extension<Authorized>,
    WithRejection(Path(id), _): WithRejection<Path<EmployeeId>, PathIdRejection>,
) -> OkOrErrorResponse<MessageResponseRestDTO> {
    if let Err(error) = role_check(&authorized, state.core.role_guard.as_ref(), Role::Admin) {
        return error.into();
    }

    let result = state
        .core
        .employee_service
        .delete_employee(&id)
        .await
        .map(|_| employee_deleted());
    OkOrErrorResponse::from_result(result, state, "deleting employee")
}
