//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - JWT token validation
//! - Password hashing and verification
//! - Signup/login request validation

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::Validator;
    use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

    #[test]
    fn test_claims_structure() {
        let claims = models::Claims {
            sub: "test-user-id".to_string(),
            exp: 1234567890,
        };

        assert_eq!(claims.sub, "test-user-id");
        assert_eq!(claims.exp, 1234567890);
    }

    #[test]
    fn test_jwt_encoding_and_decoding() {
        let secret = "test_secret_key";
        let claims = models::Claims {
            sub: "U_TESTAA".to_string(),
            exp: 9999999999, // Far future
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to encode token");

        let decoded = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .expect("Failed to decode token");

        assert_eq!(decoded.claims.sub, "U_TESTAA");
        assert_eq!(decoded.claims.exp, 9999999999);
    }

    #[test]
    fn test_jwt_validation_fails_with_wrong_secret() {
        let secret = "test_secret_key";
        let wrong_secret = "wrong_secret_key";

        let claims = models::Claims {
            sub: "U_TESTAA".to_string(),
            exp: 9999999999,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to encode token");

        let result = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(wrong_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        );

        assert!(
            result.is_err(),
            "Token validation should fail with wrong secret"
        );
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = password::hash_password("correct horse battery staple")
            .expect("Failed to hash password");

        assert!(hash.starts_with("$argon2"), "Expected PHC-format hash");
        assert!(password::verify_password("correct horse battery staple", &hash));
        assert!(!password::verify_password("wrong password", &hash));
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        assert!(!password::verify_password("anything", "not-a-phc-hash"));
        assert!(!password::verify_password("anything", ""));
    }

    #[test]
    fn test_password_hashes_are_salted() {
        let a = password::hash_password("same password").expect("hash failed");
        let b = password::hash_password("same password").expect("hash failed");
        assert_ne!(a, b, "Two hashes of the same password must differ by salt");
    }

    #[test]
    fn test_signup_validation_success() {
        let request = models::SignupRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "longenough".to_string(),
        };

        let result = validators::SignupValidator.validate(&request);
        assert!(result.is_valid, "Valid signup should pass validation");
    }

    #[test]
    fn test_signup_validation_short_password() {
        let request = models::SignupRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "short".to_string(),
        };

        let result = validators::SignupValidator.validate(&request);
        assert!(!result.is_valid, "Short password should fail validation");
        assert!(result.errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_signup_validation_bad_email() {
        let request = models::SignupRequest {
            name: "Test User".to_string(),
            email: "not-an-email".to_string(),
            password: "longenough".to_string(),
        };

        let result = validators::SignupValidator.validate(&request);
        assert!(!result.is_valid, "Malformed email should fail validation");
        assert!(result.errors.iter().any(|e| e.field == "email"));
    }

    #[test]
    fn test_signup_validation_empty_name() {
        let request = models::SignupRequest {
            name: "   ".to_string(),
            email: "test@example.com".to_string(),
            password: "longenough".to_string(),
        };

        let result = validators::SignupValidator.validate(&request);
        assert!(!result.is_valid, "Blank name should fail validation");
        assert!(result.errors.iter().any(|e| e.field == "name"));
    }

    #[test]
    fn test_login_validation_requires_password() {
        let request = models::LoginRequest {
            email: "test@example.com".to_string(),
            password: "".to_string(),
        };

        let result = validators::LoginValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "password"));
    }

    #[test]
    fn test_user_serialization_hides_password_hash() {
        let user = models::User {
            id: "U_TESTAA".to_string(),
            email: "test@example.com".to_string(),
            name: Some("Test User".to_string()),
            hashed_password: Some("$argon2id$...".to_string()),
            provider: Some("credentials".to_string()),
            created_at: Some("2026-01-01T00:00:00Z".to_string()),
        };

        let json = serde_json::to_string(&user).expect("Failed to serialize user");
        assert!(
            !json.contains("hashed_password"),
            "Password hash must never appear in API responses"
        );
    }
}
