//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Setting response DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettingDto {
    /// Setting key
    #[schema(example = "theme")]
    pub key: String,

    /// Setting value, returned exactly as stored
    pub value: serde_json::Value,

    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,

    /// Underlying cause, only present when error details are exposed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            detail: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            detail,
        }
    }
}
