//! Authentication handlers

use axum::extract::{Extension, Json};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::extractors::AuthedUser;
use super::models::{Claims, GoogleIdTokenPayload, LoginRequest, SignupRequest, User};
use super::password::{hash_password, verify_password};
use super::validators::{LoginValidator, SignupValidator};
use crate::common::{generate_user_id, safe_email_log, ApiError, AppState, Validator};

/// POST /api/auth/signup
/// Creates a credentials account
///
/// # Request Body
/// ```json
/// { "name": "...", "email": "...", "password": "..." }
/// ```
///
/// # Response
/// `201` with the public user fields, or `409` if the email is taken.
pub async fn signup_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = SignupValidator.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let email = request.email.trim().to_lowercase();

    // Email uniqueness check up front for a friendly 409; the UNIQUE
    // constraint on users.email is the real guarantee under a race.
    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    if existing.is_some() {
        warn!(
            email = %safe_email_log(&email),
            "Signup rejected: email already registered"
        );
        return Err(ApiError::Conflict(
            "An account with this email already exists".to_string(),
        ));
    }

    let user_id = generate_user_id();
    let hashed = hash_password(&request.password)?;
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO users (id, email, name, hashed_password, provider, created_at)
        VALUES (?, ?, ?, ?, 'credentials', ?)
        "#,
    )
    .bind(&user_id)
    .bind(&email)
    .bind(&request.name)
    .bind(&hashed)
    .bind(&now)
    .execute(&state.db)
    .await
    .map_err(|e| {
        if e.to_string().contains("UNIQUE constraint failed") {
            ApiError::Conflict("An account with this email already exists".to_string())
        } else {
            ApiError::DatabaseError(e)
        }
    })?;

    info!(
        user_id = %user_id,
        email = %safe_email_log(&email),
        "New user account created via signup"
    );

    let resp = serde_json::json!({
        "id": user_id,
        "email": email,
        "name": request.name,
    });

    Ok((StatusCode::CREATED, Json(resp)))
}

/// POST /api/auth/login
/// Authenticates a credentials account and issues a JWT
///
/// # Response
/// ```json
/// { "token": "<jwt token>", "user": { ... } }
/// ```
pub async fn login_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = LoginValidator.validate(&request);
    if !validation_result.is_valid {
        return Err(ApiError::from(validation_result));
    }

    let email = request.email.trim().to_lowercase();

    let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    let user = match user {
        Some(u) => u,
        None => {
            warn!(
                email = %safe_email_log(&email),
                "Login failed: unknown email"
            );
            return Err(ApiError::Unauthorized("invalid credentials".to_string()));
        }
    };

    // OAuth-only accounts carry no password hash and cannot log in here
    let stored_hash = match &user.hashed_password {
        Some(h) => h,
        None => {
            warn!(
                user_id = %user.id,
                "Login failed: account has no password (OAuth-only)"
            );
            return Err(ApiError::Unauthorized("invalid credentials".to_string()));
        }
    };

    if !verify_password(&request.password, stored_hash) {
        warn!(user_id = %user.id, "Login failed: password mismatch");
        return Err(ApiError::Unauthorized("invalid credentials".to_string()));
    }

    let token = issue_token(&user.id, &state.jwt_secret)?;

    info!(
        user_id = %user.id,
        email = %safe_email_log(&user.email),
        provider = "credentials",
        "User authentication successful via login"
    );

    Ok(Json(serde_json::json!({
        "token": token,
        "user": {
            "id": user.id,
            "email": user.email,
            "name": user.name,
        },
    })))
}

/// POST /api/auth/google
/// Authenticates a user via Google OAuth ID token
///
/// The token is verified against Google's tokeninfo endpoint. First-time
/// sign-ins create an account with no password hash.
pub async fn google_auth(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<GoogleIdTokenPayload>,
) -> Result<Json<serde_json::Value>, ApiError> {
    info!("🔐 Received Google auth request");
    let state = state_lock.read().await.clone();

    // Verify token with Google's tokeninfo endpoint
    // Docs: https://developers.google.com/identity/sign-in/web/backend-auth
    let tokeninfo_url = format!(
        "https://oauth2.googleapis.com/tokeninfo?id_token={}",
        payload.id_token
    );

    debug!("Initiating Google token validation with tokeninfo endpoint");

    let resp = state.http.get(&tokeninfo_url).send().await;
    let body = match resp {
        Ok(r) => {
            let status = r.status();
            if status.is_success() {
                r.json::<serde_json::Value>().await.map_err(|e| {
                    error!(error = %e, "Failed to parse Google tokeninfo JSON response");
                    ApiError::BadRequest("malformed id_token".to_string())
                })?
            } else {
                warn!(http_status = %status, "Google tokeninfo rejected the id_token");
                return Err(ApiError::Unauthorized(
                    "invalid or expired id_token".to_string(),
                ));
            }
        }
        Err(e) => {
            error!(
                error = %e,
                endpoint = "https://oauth2.googleapis.com/tokeninfo",
                "HTTP error contacting Google tokeninfo endpoint"
            );
            return Err(ApiError::InternalServer(
                "google token validation service unavailable".to_string(),
            ));
        }
    };

    // The token must be issued for this application
    if let Some(expected_aud) = &state.google_client_id {
        let aud = body.get("aud").and_then(|v| v.as_str()).unwrap_or("");
        if aud != expected_aud.as_str() {
            warn!("Google id_token audience mismatch");
            return Err(ApiError::Unauthorized("id_token audience mismatch".to_string()));
        }
    }

    let email = body
        .get("email")
        .and_then(|v| v.as_str())
        .map(|s| s.to_lowercase());
    let email_verified = body
        .get("email_verified")
        .and_then(|v| v.as_str())
        .map(|s| s == "true")
        .unwrap_or(false);
    let name = body
        .get("name")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let email = match email {
        Some(e) if email_verified => e,
        Some(_) => {
            warn!("Google id_token email not verified");
            return Err(ApiError::Unauthorized("email not verified".to_string()));
        }
        None => {
            warn!("Google id_token missing email claim");
            return Err(ApiError::BadRequest("id_token missing email".to_string()));
        }
    };

    // Find or create the user
    let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    let user = match user {
        Some(u) => u,
        None => {
            let user_id = generate_user_id();
            let now = Utc::now().to_rfc3339();

            sqlx::query(
                r#"
                INSERT INTO users (id, email, name, hashed_password, provider, created_at)
                VALUES (?, ?, ?, NULL, 'google', ?)
                "#,
            )
            .bind(&user_id)
            .bind(&email)
            .bind(&name)
            .bind(&now)
            .execute(&state.db)
            .await
            .map_err(ApiError::DatabaseError)?;

            info!(
                user_id = %user_id,
                email = %safe_email_log(&email),
                "New user account created via Google OAuth"
            );

            sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
                .bind(&user_id)
                .fetch_one(&state.db)
                .await
                .map_err(ApiError::DatabaseError)?
        }
    };

    let token = issue_token(&user.id, &state.jwt_secret)?;

    info!(
        user_id = %user.id,
        email = %safe_email_log(&user.email),
        provider = "google",
        "User authentication successful via Google OAuth"
    );

    Ok(Json(serde_json::json!({
        "token": token,
        "user": {
            "id": user.id,
            "email": user.email,
            "name": user.name,
        },
    })))
}

/// GET /api/me
/// Returns the current authenticated user's information
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&authed.id)
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok(Json(serde_json::json!({ "user": user })))
}

/// POST /api/auth/logout
/// Logout is client-side token removal; the server just acknowledges
pub async fn logout_handler(_authed: AuthedUser) -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({ "success": true })))
}

/// Create a signed JWT for the given user, valid for 24 hours
fn issue_token(user_id: &str, jwt_secret: &str) -> Result<String, ApiError> {
    let exp = (Utc::now() + Duration::hours(24)).timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| {
        error!(error = %e, user_id = %user_id, "JWT encoding error during authentication");
        ApiError::InternalServer("jwt error".to_string())
    })
}
