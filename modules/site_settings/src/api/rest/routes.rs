//! Route registration and OpenAPI document

use super::{
    dto::{ApiResponse, SettingDto},
    error::ErrorResponse,
    handlers::{self, RestState},
};
use axum::{extract::Path, routing::get, Extension, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_site_setting,
        handlers::get_all_website_config,
        handlers::get_website_config,
    ),
    components(schemas(SettingDto)),
    tags(
        (name = "settings", description = "Site-wide settings"),
        (name = "website-config", description = "Website configuration"),
    )
)]
pub struct ApiDoc;

/// Register all REST routes
pub fn register_routes(router: Router, state: RestState) -> anyhow::Result<Router> {
    let router = router
        .route("/settings/{key}", get(get_site_setting_handler))
        .route("/website-config", get(get_all_website_config_handler))
        .route("/website-config/{key}", get(get_website_config_handler))
        .route("/openapi.json", get(openapi_handler))
        .layer(Extension(state));

    Ok(router)
}

// ===== Handler wrappers that extract state from Extension =====

async fn get_site_setting_handler(
    Extension(state): Extension<RestState>,
    path: Path<String>,
) -> Result<Json<ApiResponse<SettingDto>>, ErrorResponse> {
    handlers::get_site_setting(state, path).await
}

async fn get_all_website_config_handler(
    Extension(state): Extension<RestState>,
) -> Result<Json<ApiResponse<Vec<SettingDto>>>, ErrorResponse> {
    handlers::get_all_website_config(state).await
}

async fn get_website_config_handler(
    Extension(state): Extension<RestState>,
    path: Path<String>,
) -> Result<Json<ApiResponse<SettingDto>>, ErrorResponse> {
    handlers::get_website_config(state, path).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
