use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::DatabaseConnection;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{json::AppJson, path::AppPath};
use crate::models::pc_laptop::*;
use crate::response::{ApiResponse, MessageResponse};
use crate::services::PcLaptopService;
use crate::state::AppState;

fn pc_laptop_service(state: &AppState) -> PcLaptopService<'_, DatabaseConnection> {
    PcLaptopService::new(&state.db)
        .enforce_slot_categories(state.config.inventory.enforce_slot_categories)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "PC/Laptops",
    operation_id = "listPcLaptops",
    summary = "List all PC/laptop bundles",
    description = "Returns every bundle, most recently created first, with each slot resolved to its asset.",
    responses(
        (status = 200, description = "All bundles", body = ApiResponse<Vec<PcLaptopResponse>>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_pc_laptops(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PcLaptopResponse>>>, AppError> {
    let bundles = pc_laptop_service(&state).list().await?;
    Ok(Json(ApiResponse::ok(
        bundles.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "PC/Laptops",
    operation_id = "getPcLaptop",
    summary = "Get a PC/laptop bundle",
    params(("id" = Uuid, Path, description = "Bundle ID")),
    responses(
        (status = 200, description = "Bundle with resolved slots", body = ApiResponse<PcLaptopResponse>),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Bundle not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(pc_laptop_id = %id))]
pub async fn get_pc_laptop(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<PcLaptopResponse>>, AppError> {
    let bundle = pc_laptop_service(&state).get(id).await?;
    Ok(Json(ApiResponse::ok(bundle.into())))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "PC/Laptops",
    operation_id = "createPcLaptop",
    summary = "Create a PC/laptop bundle",
    description = "Creates a bundle with any subset of its nine slots filled. Referenced assets are not required to exist.",
    request_body = CreatePcLaptopRequest,
    responses(
        (status = 201, description = "Bundle created", body = ApiResponse<PcLaptopResponse>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn create_pc_laptop(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePcLaptopRequest>,
) -> Result<impl IntoResponse, AppError> {
    let bundle = pc_laptop_service(&state).create(payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(PcLaptopResponse::from(bundle))),
    ))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "PC/Laptops",
    operation_id = "updatePcLaptop",
    summary = "Update a PC/laptop bundle",
    description = "Sets only the supplied slots. Absent slots are kept; `null` empties a slot.",
    params(("id" = Uuid, Path, description = "Bundle ID")),
    request_body = UpdatePcLaptopRequest,
    responses(
        (status = 200, description = "Bundle updated", body = ApiResponse<PcLaptopResponse>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Bundle not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(pc_laptop_id = %id))]
pub async fn update_pc_laptop(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdatePcLaptopRequest>,
) -> Result<Json<ApiResponse<PcLaptopResponse>>, AppError> {
    let bundle = pc_laptop_service(&state)
        .update(id, payload.into())
        .await?;
    Ok(Json(ApiResponse::ok(bundle.into())))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "PC/Laptops",
    operation_id = "deletePcLaptop",
    summary = "Delete a PC/laptop bundle",
    description = "Removes the bundle. Its assets and any employee referencing it are left untouched.",
    params(("id" = Uuid, Path, description = "Bundle ID")),
    responses(
        (status = 200, description = "Bundle deleted", body = MessageResponse),
        (status = 404, description = "Bundle not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(pc_laptop_id = %id))]
pub async fn delete_pc_laptop(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    pc_laptop_service(&state).delete(id).await?;
    Ok(Json(MessageResponse::ok("PC/Laptop deleted successfully")))
}
