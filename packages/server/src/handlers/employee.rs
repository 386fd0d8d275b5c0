use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{json::AppJson, path::AppPath};
use crate::models::employee::*;
use crate::response::{ApiResponse, MessageResponse};
use crate::services::{EmployeeService, NewEmployee};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Employees",
    operation_id = "listEmployees",
    summary = "List all employees",
    description = "Returns every employee, most recently created first, with the assigned bundle and assets resolved.",
    responses(
        (status = 200, description = "All employees", body = ApiResponse<Vec<EmployeeResponse>>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EmployeeResponse>>>, AppError> {
    let employees = EmployeeService::new(&state.db).list().await?;
    Ok(Json(ApiResponse::ok(
        employees.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Employees",
    operation_id = "getEmployee",
    summary = "Get an employee",
    params(("id" = Uuid, Path, description = "Employee record ID")),
    responses(
        (status = 200, description = "Employee with resolved references", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Employee not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(employee_id = %id))]
pub async fn get_employee(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, AppError> {
    let employee = EmployeeService::new(&state.db).get(id).await?;
    Ok(Json(ApiResponse::ok(employee.into())))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Employees",
    operation_id = "createEmployee",
    summary = "Create an employee",
    description = "Creates an employee. `name` and `email` are required; `email` and, when given, `employeeId` must be unique.",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Email or employee ID already in use (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(email = ?payload.email))]
pub async fn create_employee(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = NewEmployee::try_from(payload)?;
    let employee = EmployeeService::new(&state.db).create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(EmployeeResponse::from(employee))),
    ))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Employees",
    operation_id = "updateEmployee",
    summary = "Update an employee",
    description = "Merges the supplied fields. Absent fields are kept; `null` clears a nullable field. `assignedAssets`, when present, replaces the list.",
    params(("id" = Uuid, Path, description = "Employee record ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Employee not found (NOT_FOUND)", body = ErrorBody),
        (status = 409, description = "Email or employee ID already in use (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(employee_id = %id))]
pub async fn update_employee(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, AppError> {
    let employee = EmployeeService::new(&state.db)
        .update(id, payload.into())
        .await?;
    Ok(Json(ApiResponse::ok(employee.into())))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Employees",
    operation_id = "deleteEmployee",
    summary = "Delete an employee",
    description = "Removes the employee and its asset assignments. Assigned bundles and assets are kept.",
    params(("id" = Uuid, Path, description = "Employee record ID")),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 404, description = "Employee not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(employee_id = %id))]
pub async fn delete_employee(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    EmployeeService::new(&state.db).delete(id).await?;
    Ok(Json(MessageResponse::ok("Employee deleted successfully")))
}

#[utoipa::path(
    post,
    path = "/{id}/assign-pc-laptop",
    tag = "Employees",
    operation_id = "assignPcLaptop",
    summary = "Assign a PC/laptop bundle",
    description = "Overwrites the employee's bundle reference. The bundle is not required to exist; `null` unassigns.",
    params(("id" = Uuid, Path, description = "Employee record ID")),
    request_body = AssignPcLaptopRequest,
    responses(
        (status = 200, description = "Bundle assigned", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Employee not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(employee_id = %id, pc_laptop_id = ?payload.pc_laptop_id))]
pub async fn assign_pc_laptop(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<AssignPcLaptopRequest>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, AppError> {
    let employee = EmployeeService::new(&state.db)
        .assign_pc_laptop(id, payload.pc_laptop_id)
        .await?;
    Ok(Json(ApiResponse::ok(employee.into())))
}

#[utoipa::path(
    post,
    path = "/{id}/assign-assets",
    tag = "Employees",
    operation_id = "assignAssets",
    summary = "Assign assets",
    description = "Replaces the employee's directly assigned assets with `assetIds`, in order. Duplicates are kept.",
    params(("id" = Uuid, Path, description = "Employee record ID")),
    request_body = AssignAssetsRequest,
    responses(
        (status = 200, description = "Assets assigned", body = ApiResponse<EmployeeResponse>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Employee not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(employee_id = %id, count = payload.asset_ids.len()))]
pub async fn assign_assets(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<AssignAssetsRequest>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, AppError> {
    let employee = EmployeeService::new(&state.db)
        .assign_assets(id, payload.asset_ids)
        .await?;
    Ok(Json(ApiResponse::ok(employee.into())))
}
