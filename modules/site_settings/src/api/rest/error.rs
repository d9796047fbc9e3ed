//! HTTP error mapping to the response envelope

use super::dto::ApiResponse;
use crate::contract::{SettingsError, StatusCategory};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

pub const SETTING_NOT_FOUND: &str = "Setting not found";
pub const FAILED_TO_FETCH_SETTING: &str = "Failed to fetch setting";
pub const FAILED_TO_GET_WEBSITE_SETTINGS: &str = "Failed to get website settings";

/// Classified failure ready for transport
#[derive(Debug)]
pub struct ErrorResponse {
    pub category: StatusCategory,
    pub message: String,
    /// Underlying cause; `None` when hidden from clients
    pub cause: Option<String>,
}

impl ErrorResponse {
    pub fn new(category: StatusCategory, message: impl Into<String>, cause: Option<String>) -> Self {
        Self {
            category,
            message: message.into(),
            cause,
        }
    }

    pub fn status(&self) -> StatusCode {
        status_for(self.category)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ApiResponse::error(self.message, self.cause))).into_response()
    }
}

pub fn status_for(category: StatusCategory) -> StatusCode {
    match category {
        StatusCategory::ResourceMissing => StatusCode::NOT_FOUND,
        StatusCategory::ServerFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a classified domain error to a response.
///
/// `failure_message` is the operation-specific text used for server failures.
pub fn map_domain_error(
    error: SettingsError,
    failure_message: &str,
    expose_details: bool,
) -> ErrorResponse {
    let category = error.category();
    let message = match category {
        StatusCategory::ResourceMissing => SETTING_NOT_FOUND,
        StatusCategory::ServerFailure => failure_message,
    };
    let cause = expose_details.then(|| error.to_string());
    ErrorResponse::new(category, message, cause)
}
