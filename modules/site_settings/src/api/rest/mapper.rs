//! Conversions from contract models to REST DTOs

use super::dto::SettingDto;
use crate::contract;

impl From<contract::Setting> for SettingDto {
    fn from(setting: contract::Setting) -> Self {
        Self {
            key: setting.key,
            value: setting.value,
            updated_at: setting.updated_at,
        }
    }
}
