// src/config.rs
use crate::domain::error::DomainResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::trace;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the JSON vendor store
    #[serde(default = "default_store_path")]
    pub store_path: String,

    /// Tenant used when no --tenant flag is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tenant: Option<String>,
}

fn default_store_path() -> String {
    let store_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/vowsync");

    store_dir
        .join("vendors.json")
        .to_str()
        .unwrap_or("vendors.json")
        .to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            default_tenant: None,
        }
    }
}

/// Loads settings: defaults, then the config file (explicit path or
/// `~/.config/vowsync/config.toml`), then `VOWSYNC_*` environment overrides.
pub fn load_settings(config_path: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = Settings::default();

    let config_sources = [
        config_path.map(Path::to_path_buf),
        dirs::home_dir().map(|p| p.join(".config/vowsync/config.toml")),
    ];

    for config_path in config_sources.iter().flatten() {
        if config_path.exists() {
            trace!("Loading config from: {:?}", config_path);

            if let Ok(config_text) = std::fs::read_to_string(config_path) {
                if let Ok(file_settings) = toml::from_str::<Settings>(&config_text) {
                    settings = file_settings;
                    break;
                }
            }
        }
    }

    if let Ok(store_path) = std::env::var("VOWSYNC_STORE_PATH") {
        trace!("Using VOWSYNC_STORE_PATH from environment: {}", store_path);
        settings.store_path = store_path;
    }

    if let Ok(tenant) = std::env::var("VOWSYNC_TENANT") {
        trace!("Using VOWSYNC_TENANT from environment: {}", tenant);
        settings.default_tenant = Some(tenant);
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

/// Renders settings as a TOML document, also usable as a starter config file.
pub fn to_toml(settings: &Settings) -> String {
    toml::to_string_pretty(settings)
        .unwrap_or_else(|_| "# Error rendering configuration".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::EnvGuard;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_default_settings() {
        let _guard = EnvGuard::new();

        let settings = load_settings(None).unwrap();

        assert!(settings.store_path.contains("vendors.json"));
        assert_eq!(settings.default_tenant, None);
    }

    #[test]
    #[serial]
    fn test_environment_variables_override() {
        let _guard = EnvGuard::new();

        env::set_var("VOWSYNC_STORE_PATH", "/test/custom.json");
        env::set_var("VOWSYNC_TENANT", "wedding-42");

        let settings = load_settings(None).unwrap();

        assert_eq!(settings.store_path, "/test/custom.json");
        assert_eq!(settings.default_tenant.as_deref(), Some("wedding-42"));
    }

    #[test]
    #[serial]
    fn test_explicit_config_file() {
        let _guard = EnvGuard::new();

        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "store_path = \"/data/vendors.json\"\ndefault_tenant = \"wedding-1\"\n",
        )
        .unwrap();

        let settings = load_settings(Some(&config_path)).unwrap();

        assert_eq!(settings.store_path, "/data/vendors.json");
        assert_eq!(settings.default_tenant.as_deref(), Some("wedding-1"));
    }

    #[test]
    fn test_to_toml_round_trips() {
        let rendered = to_toml(&Settings::default());
        let parsed: Settings = toml::from_str(&rendered).unwrap();
        assert!(parsed.store_path.contains("vendors.json"));
    }
}
