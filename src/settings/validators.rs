// src/settings/validators.rs

use super::models::UpdateSettingsRequest;
use crate::common::{ValidationResult, Validator};

pub struct SettingsValidator;

impl Validator<UpdateSettingsRequest> for SettingsValidator {
    fn validate(&self, data: &UpdateSettingsRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        } else if data.name.len() > 255 {
            result.add_error("name", "Name must be less than 255 characters");
        }

        result
    }
}
