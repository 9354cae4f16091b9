use crate::AppSettings;
use color_eyre::eyre::Result;
use std::path::Path;

/// Load settings from `config/settings.yaml`, with `APP__`-prefixed
/// environment variables taking precedence (e.g. `APP__API__API_KEY`).
pub fn load_app_settings() -> Result<AppSettings> {
    // .env can supply the api key without touching the yaml.
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    Ok(builder.build()?.try_deserialize::<AppSettings>()?)
}
