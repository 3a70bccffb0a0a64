use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_ms: u64,
    pub export_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub token_path: String,
}

/// Load `config/app.toml` over the built-in defaults, with an
/// `APP_`-prefixed environment override layer (e.g. `APP_BACKEND__BASE_URL`).
pub fn load_app_config() -> Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("backend.base_url", "http://localhost:8080")?
        .set_default("backend.timeout_ms", 5_000_i64)?
        .set_default("backend.export_timeout_ms", 30_000_i64)?
        .set_default("auth.token_path", ".dashboard-token")?
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
