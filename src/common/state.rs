// Application state shared across all modules

use reqwest::Client;
use sqlx::SqlitePool;

use crate::common::dev_mode::DevModeConfig;

/// Application state containing database pool and configuration
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub http: Client,
    pub jwt_secret: String,
    pub google_client_id: Option<String>,
    pub dev_mode: DevModeConfig,
}
