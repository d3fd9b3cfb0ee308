// src/auth/validators.rs

use super::models::{LoginRequest, SignupRequest};
use crate::common::{ValidationResult, Validator};

// ============================================================================
// Auth Validators
// ============================================================================

pub struct SignupValidator;

impl Validator<SignupRequest> for SignupValidator {
    fn validate(&self, data: &SignupRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        } else if data.name.len() > 255 {
            result.add_error("name", "Name must be less than 255 characters");
        }

        validate_email(&data.email, &mut result);

        if data.password.len() < 8 {
            result.add_error("password", "Password must be at least 8 characters");
        } else if data.password.len() > 128 {
            result.add_error("password", "Password must be less than 128 characters");
        }

        result
    }
}

pub struct LoginValidator;

impl Validator<LoginRequest> for LoginValidator {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        validate_email(&data.email, &mut result);

        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        }

        result
    }
}

/// Minimal email shape check: one '@' with a dotted domain after it
fn validate_email(email: &str, result: &mut ValidationResult) {
    let email = email.trim();

    if email.is_empty() {
        result.add_error("email", "Email is required");
        return;
    }

    if email.len() > 255 {
        result.add_error("email", "Email must be less than 255 characters");
        return;
    }

    let parts: Vec<&str> = email.split('@').collect();
    let valid = parts.len() == 2
        && !parts[0].is_empty()
        && parts[1].contains('.')
        && !parts[1].starts_with('.')
        && !parts[1].ends_with('.');

    if !valid {
        result.add_error("email", "Invalid email address");
    }
}
