use thiserror::Error;

use vidveil_core_types::VidveilError;
use vidveil_settings_store::StoreError;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("invalid settings payload: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        SettingsError::Invalid(value.to_string())
    }
}

impl From<SettingsError> for VidveilError {
    fn from(value: SettingsError) -> Self {
        VidveilError::new(value.to_string())
    }
}
