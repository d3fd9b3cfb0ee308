// src/habits/validators.rs

use super::models::{CreateHabitRequest, UpdateHabitRequest};
use crate::common::{ValidationResult, Validator};
use std::collections::HashSet;

// ============================================================================
// Habit Validators
// ============================================================================

pub struct HabitValidator;

impl Validator<CreateHabitRequest> for HabitValidator {
    fn validate(&self, data: &CreateHabitRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        validate_name(&data.name, &mut result);

        if let Some(emoji) = &data.emoji {
            validate_emoji(emoji, &mut result);
        }

        if let Some(frequency) = &data.frequency {
            validate_frequency(frequency, &mut result);
        }

        result
    }
}

impl Validator<UpdateHabitRequest> for HabitValidator {
    fn validate(&self, data: &UpdateHabitRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if let Some(name) = &data.name {
            validate_name(name, &mut result);
        }

        if let Some(emoji) = &data.emoji {
            validate_emoji(emoji, &mut result);
        }

        if let Some(frequency) = &data.frequency {
            validate_frequency(frequency, &mut result);
        }

        result
    }
}

fn validate_name(name: &str, result: &mut ValidationResult) {
    if name.trim().is_empty() {
        result.add_error("name", "Habit name is required");
    } else if name.len() > 255 {
        result.add_error("name", "Habit name must be less than 255 characters");
    }
}

fn validate_emoji(emoji: &str, result: &mut ValidationResult) {
    if emoji.trim().is_empty() {
        result.add_error("emoji", "Emoji cannot be blank");
    } else if emoji.chars().count() > 8 {
        result.add_error("emoji", "Emoji must be a single display glyph");
    }
}

fn validate_frequency(frequency: &str, result: &mut ValidationResult) {
    let valid_frequencies = HashSet::from(["daily", "weekly"]);
    if !valid_frequencies.contains(frequency) {
        result.add_error("frequency", "Frequency must be 'daily' or 'weekly'");
    }
}
