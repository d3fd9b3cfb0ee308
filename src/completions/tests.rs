//! Tests for completions module
//!
//! These tests verify the toggle request validation and model structure.
//! The toggle protocol itself rides on the unique (habit_id, completed_date)
//! index created in migrations.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::Validator;

    #[test]
    fn test_completion_model_structure() {
        let completion = models::Completion {
            id: "C_K7NP3X".to_string(),
            habit_id: "H_8MWQT2".to_string(),
            user_id: "U_TESTAA".to_string(),
            completed_date: "2026-01-05".to_string(),
            created_at: Some("2026-01-05T09:30:00Z".to_string()),
        };

        assert_eq!(completion.completed_date, "2026-01-05");
        assert_eq!(completion.habit_id, "H_8MWQT2");
    }

    #[test]
    fn test_toggle_validation_accepts_valid_date() {
        let request = models::ToggleCompletionRequest {
            date: "2026-01-05".to_string(),
        };

        let result = validators::ToggleCompletionValidator.validate(&request);
        assert!(result.is_valid, "Valid date should pass validation");
    }

    #[test]
    fn test_toggle_validation_rejects_malformed_date() {
        for bad in ["not-a-date", "2026/01/05", "05-01-2026", ""] {
            let request = models::ToggleCompletionRequest {
                date: bad.to_string(),
            };

            let result = validators::ToggleCompletionValidator.validate(&request);
            assert!(!result.is_valid, "'{}' should fail validation", bad);
            assert!(result.errors.iter().any(|e| e.field == "date"));
        }
    }

    #[test]
    fn test_toggle_validation_rejects_impossible_date() {
        let request = models::ToggleCompletionRequest {
            date: "2026-02-30".to_string(),
        };

        let result = validators::ToggleCompletionValidator.validate(&request);
        assert!(!result.is_valid, "Feb 30 should fail validation");
    }

    #[test]
    fn test_toggle_validation_rejects_unpadded_date() {
        // "2026-1-5" parses but does not match the stored format
        let request = models::ToggleCompletionRequest {
            date: "2026-1-5".to_string(),
        };

        let result = validators::ToggleCompletionValidator.validate(&request);
        assert!(!result.is_valid, "Unpadded date should fail validation");
    }

    #[test]
    fn test_toggle_response_serialization() {
        let response = models::ToggleCompletionResponse { completed: true };
        let json = serde_json::to_value(&response).expect("Failed to serialize");
        assert_eq!(json, serde_json::json!({ "completed": true }));
    }
}
