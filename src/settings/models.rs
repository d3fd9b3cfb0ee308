use serde::Deserialize;

/// Settings update request body
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub name: String,
}
