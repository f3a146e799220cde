//! Application configuration management.
//!
//! All runtime configuration comes from environment variables. Sensitive
//! fields are marked and must never be logged.

use envconfig::Envconfig;
use std::sync::LazyLock;

/// Environment-driven application configuration.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Document store connection string (NON-SENSITIVE)
    /// Example: "sqlite:data/clinic.db"
    pub db_host: String,

    /// Host address for web server binding (NON-SENSITIVE)
    /// Example: "0.0.0.0", "localhost"
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "5001")]
    pub web_server_port: u16,

    /// 🔒 SENSITIVE: Bearer token the auth gate accepts.
    /// Every /api route rejects requests that do not carry it.
    pub api_auth_token: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }
}

/// Global application configuration instance.
///
/// Loaded on first access; the process aborts with a descriptive message
/// when a required variable is missing.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});
