use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    /// Backend the store is running on.
    #[schema(example = "Sqlite")]
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    operation_id = "health",
    summary = "Service health",
    description = "Pings the store and reports its backend.",
    responses(
        (status = 200, description = "Service and store are reachable", body = ApiResponse<HealthResponse>),
        (status = 500, description = "Store unreachable (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, AppError> {
    state.db.ping().await?;
    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok",
        database: format!("{:?}", state.db.get_database_backend()),
    })))
}
