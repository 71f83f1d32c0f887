use shared_types::{AppConfig, FeatureFlags, UiSettings};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse a config file, falling back to defaults when it is missing or invalid.
pub fn read_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                AppConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config file not readable, using defaults");
            AppConfig::default()
        }
    }
}

/// Load `config.toml` into the global `OnceLock`. Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config(Path::new(CONFIG_PATH));
        tracing::info!(features = ?config.features, ui = ?config.ui, "configuration loaded");
        config
    })
}

/// Loaded configuration, or defaults if `load_config()` hasn't run yet.
pub fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub fn feature_flags() -> FeatureFlags {
    app_config().features
}

pub fn ui_settings() -> UiSettings {
    app_config().ui
}
