use axum::Router;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/health", health_routes())
        .nest("/assets", asset_routes())
        .nest("/pc-laptops", pc_laptop_routes())
        .nest("/employees", employee_routes())
}

/// `/system-assets`: the asset routes again, under the path the web client
/// uses. Served but left out of the OpenAPI document.
pub fn asset_alias_routes() -> Router<AppState> {
    let (router, _) = asset_routes().split_for_parts();
    router
}

fn health_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(handlers::health::health))
}

fn asset_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::asset::list_assets,
            handlers::asset::create_asset
        ))
        .routes(routes!(handlers::asset::list_assets_by_category))
        .routes(routes!(
            handlers::asset::get_asset,
            handlers::asset::update_asset,
            handlers::asset::delete_asset
        ))
}

fn pc_laptop_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::pc_laptop::list_pc_laptops,
            handlers::pc_laptop::create_pc_laptop
        ))
        .routes(routes!(
            handlers::pc_laptop::get_pc_laptop,
            handlers::pc_laptop::update_pc_laptop,
            handlers::pc_laptop::delete_pc_laptop
        ))
}

fn employee_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::employee::list_employees,
            handlers::employee::create_employee
        ))
        .routes(routes!(
            handlers::employee::get_employee,
            handlers::employee::update_employee,
            handlers::employee::delete_employee
        ))
        .routes(routes!(handlers::employee::assign_pc_laptop))
        .routes(routes!(handlers::employee::assign_assets))
}
