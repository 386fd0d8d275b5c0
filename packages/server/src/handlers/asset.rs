use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{json::AppJson, path::AppPath};
use crate::models::asset::*;
use crate::models::shared::parse_category;
use crate::response::{ApiResponse, MessageResponse};
use crate::services::{AssetChanges, AssetService, NewAsset};
use crate::state::AppState;

/// List all assets.
#[utoipa::path(
    get,
    path = "/",
    tag = "Assets",
    operation_id = "listAssets",
    summary = "List all assets",
    description = "Returns every system asset, most recently created first.",
    responses(
        (status = 200, description = "All assets", body = ApiResponse<Vec<AssetResponse>>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_assets(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AssetResponse>>>, AppError> {
    let assets = AssetService::new(&state.db).list().await?;
    Ok(Json(ApiResponse::ok(
        assets.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/category/{category}",
    tag = "Assets",
    operation_id = "listAssetsByCategory",
    summary = "List assets of one category",
    description = "Returns the assets whose category is exactly `category`, most recently created first.",
    params(("category" = String, Path, description = "Asset category, e.g. `ram` or `power-supply`")),
    responses(
        (status = 200, description = "Matching assets", body = ApiResponse<Vec<AssetResponse>>),
        (status = 400, description = "Unknown category (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_assets_by_category(
    State(state): State<AppState>,
    AppPath(category): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<AssetResponse>>>, AppError> {
    let category = parse_category(&category)?;
    let assets = AssetService::new(&state.db)
        .list_by_category(category)
        .await?;
    Ok(Json(ApiResponse::ok(
        assets.into_iter().map(Into::into).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Assets",
    operation_id = "getAsset",
    summary = "Get an asset",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset", body = ApiResponse<AssetResponse>),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Asset not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(asset_id = %id))]
pub async fn get_asset(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<AssetResponse>>, AppError> {
    let asset = AssetService::new(&state.db).get(id).await?;
    Ok(Json(ApiResponse::ok(asset.into())))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Assets",
    operation_id = "createAsset",
    summary = "Create an asset",
    description = "Registers a new system asset. `category` is required; every other attribute is optional and may be set regardless of category.",
    request_body = CreateAssetRequest,
    responses(
        (status = 201, description = "Asset created", body = ApiResponse<AssetResponse>),
        (status = 400, description = "Missing or unknown category (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(category = ?payload.category))]
pub async fn create_asset(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAssetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = NewAsset::try_from(payload)?;
    let asset = AssetService::new(&state.db).create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AssetResponse::from(asset))),
    ))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Assets",
    operation_id = "updateAsset",
    summary = "Update an asset",
    description = "Merges the supplied fields into the asset. Absent fields are kept; `null` clears a field.",
    params(("id" = Uuid, Path, description = "Asset ID")),
    request_body = UpdateAssetRequest,
    responses(
        (status = 200, description = "Asset updated", body = ApiResponse<AssetResponse>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Asset not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(asset_id = %id))]
pub async fn update_asset(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateAssetRequest>,
) -> Result<Json<ApiResponse<AssetResponse>>, AppError> {
    let changes = AssetChanges::try_from(payload)?;
    let asset = AssetService::new(&state.db).update(id, changes).await?;
    Ok(Json(ApiResponse::ok(asset.into())))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Assets",
    operation_id = "deleteAsset",
    summary = "Delete an asset",
    description = "Removes the asset. Bundles and employees that reference it are left untouched and resolve the reference to `null`.",
    params(("id" = Uuid, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset deleted", body = MessageResponse),
        (status = 404, description = "Asset not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(asset_id = %id))]
pub async fn delete_asset(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    AssetService::new(&state.db).delete(id).await?;
    Ok(Json(MessageResponse::ok("Asset deleted successfully")))
}
