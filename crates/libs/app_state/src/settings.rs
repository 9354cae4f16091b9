use serde::Deserialize;

/// Immutable application settings, loaded once at startup and injected into
/// the client and controllers. No free-standing module state.
#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Deployed API stage, e.g. `https://xyz.execute-api.us-east-1.amazonaws.com/prod`.
    pub base_url: String,
    /// Static credential for the backend usage plan, sent as `x-api-key`.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
