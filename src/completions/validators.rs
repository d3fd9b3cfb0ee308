// src/completions/validators.rs

use super::models::ToggleCompletionRequest;
use crate::common::{ValidationResult, Validator};
use chrono::NaiveDate;

// ============================================================================
// Completion Validators
// ============================================================================

pub struct ToggleCompletionValidator;

impl Validator<ToggleCompletionRequest> for ToggleCompletionValidator {
    fn validate(&self, data: &ToggleCompletionRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        // A parseable calendar date in exactly the stored format. Parsing is
        // the gate: nothing malformed ever reaches the streak engine.
        if NaiveDate::parse_from_str(&data.date, "%Y-%m-%d").is_err() {
            result.add_error("date", "Date must be a valid YYYY-MM-DD calendar date");
        } else if data.date.len() != 10 {
            // chrono accepts "2026-1-5"; the store format is zero-padded
            result.add_error("date", "Date must be zero-padded YYYY-MM-DD");
        }

        result
    }
}
