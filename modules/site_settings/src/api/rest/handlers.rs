//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::{ApiResponse, SettingDto},
    error::{map_domain_error, ErrorResponse, FAILED_TO_FETCH_SETTING, FAILED_TO_GET_WEBSITE_SETTINGS},
};
use crate::domain::Service;
use axum::{extract::Path, Json};
use std::sync::Arc;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct RestState {
    pub service: Arc<Service>,
    pub expose_error_details: bool,
}

/// Get a site setting by key
#[utoipa::path(
    get,
    path = "/settings/{key}",
    params(("key" = String, Path, description = "Setting key")),
    responses(
        (status = 200, description = "Setting found", body = SettingDto),
        (status = 404, description = "Setting not found"),
        (status = 500, description = "Failed to fetch setting"),
    ),
    tag = "settings"
)]
pub async fn get_site_setting(
    state: RestState,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<SettingDto>>, ErrorResponse> {
    let setting = state
        .service
        .get_site_setting(&key)
        .await
        .map_err(|e| map_domain_error(e, FAILED_TO_FETCH_SETTING, state.expose_error_details))?;

    Ok(Json(ApiResponse::success(setting.into())))
}

/// List all website configuration records
#[utoipa::path(
    get,
    path = "/website-config",
    responses(
        (status = 200, description = "All website configuration records", body = [SettingDto]),
        (status = 500, description = "Failed to get website settings"),
    ),
    tag = "website-config"
)]
pub async fn get_all_website_config(
    state: RestState,
) -> Result<Json<ApiResponse<Vec<SettingDto>>>, ErrorResponse> {
    let settings = state
        .service
        .get_all_website_config()
        .await
        .map_err(|e| {
            map_domain_error(e, FAILED_TO_GET_WEBSITE_SETTINGS, state.expose_error_details)
        })?;

    let items: Vec<SettingDto> = settings.into_iter().map(|s| s.into()).collect();
    Ok(Json(ApiResponse::success(items)))
}

/// Get a website configuration record by key
#[utoipa::path(
    get,
    path = "/website-config/{key}",
    params(("key" = String, Path, description = "Website configuration key")),
    responses(
        (status = 200, description = "Record found", body = SettingDto),
        (status = 404, description = "Setting not found (only when website_config_not_found is enabled)"),
        (status = 500, description = "Failed to get website settings"),
    ),
    tag = "website-config"
)]
pub async fn get_website_config(
    state: RestState,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<SettingDto>>, ErrorResponse> {
    let setting = state
        .service
        .get_website_config(&key)
        .await
        .map_err(|e| {
            map_domain_error(e, FAILED_TO_GET_WEBSITE_SETTINGS, state.expose_error_details)
        })?;

    Ok(Json(ApiResponse::success(setting.into())))
}
