//! Configuration loading for OriginLytics services
//!
//! Settings resolution follows a CLI → ENV → TOML priority order, with an
//! OS-dependent default config file location. Analyzer weight tables are
//! compile-time constants and are never read from configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// TOML configuration file contents
///
/// All fields are optional; absent fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Path to a JSON emotion lexicon overriding the built-in table
    pub lexicon_path: Option<PathBuf>,

    /// Minimum word count required before analysis runs
    pub min_word_count: Option<usize>,

    /// Default tracing filter (overridden by RUST_LOG)
    pub log_filter: Option<String>,
}

/// Resolve the configuration file path following priority order:
/// 1. `OLY_CONFIG` environment variable (highest priority)
/// 2. User config directory (`~/.config/originlytics/oly-ad.toml`)
/// 3. System config (`/etc/originlytics/oly-ad.toml`, Linux only)
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("OLY_CONFIG") {
        return Some(PathBuf::from(path));
    }

    if let Some(user_config) = dirs::config_dir().map(|d| d.join("originlytics").join("oly-ad.toml")) {
        if user_config.exists() {
            return Some(user_config);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/originlytics/oly-ad.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Load TOML configuration from the resolved path
///
/// A missing config file is not an error; built-in defaults apply.
/// A present but unparseable file is reported as a configuration error.
pub fn load_toml_config() -> Result<TomlConfig> {
    let Some(path) = resolve_config_path() else {
        return Ok(TomlConfig::default());
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("Read config failed ({}): {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse config failed ({}): {}", path.display(), e)))
}

/// Resolve the emotion lexicon path from 3-tier configuration
///
/// **Priority:** CLI argument → ENV (`OLY_LEXICON_PATH`) → TOML
///
/// Returns `None` when no source configures a lexicon (the built-in
/// table is used).
pub fn resolve_lexicon_path(cli_arg: Option<&PathBuf>, toml_config: &TomlConfig) -> Option<PathBuf> {
    let env_path = std::env::var("OLY_LEXICON_PATH").ok().map(PathBuf::from);

    let mut sources = Vec::new();
    if cli_arg.is_some() {
        sources.push("CLI");
    }
    if env_path.is_some() {
        sources.push("environment");
    }
    if toml_config.lexicon_path.is_some() {
        sources.push("TOML");
    }

    if sources.len() > 1 {
        warn!(
            "Emotion lexicon configured in multiple sources: {}. Using {} (highest priority).",
            sources.join(", "),
            sources[0]
        );
    }

    cli_arg
        .cloned()
        .or(env_path)
        .or_else(|| toml_config.lexicon_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_toml_config_defaults() {
        let config: TomlConfig = toml::from_str("").unwrap();
        assert!(config.lexicon_path.is_none());
        assert!(config.min_word_count.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_toml_config_parse() {
        let config: TomlConfig = toml::from_str(
            r#"
            lexicon_path = "/opt/oly/lexicon.json"
            min_word_count = 25
            log_filter = "oly_ad=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.lexicon_path, Some(PathBuf::from("/opt/oly/lexicon.json")));
        assert_eq!(config.min_word_count, Some(25));
        assert_eq!(config.log_filter.as_deref(), Some("oly_ad=debug"));
    }

    #[test]
    #[serial]
    fn test_lexicon_resolution_priority() {
        std::env::remove_var("OLY_LEXICON_PATH");

        let toml_config = TomlConfig {
            lexicon_path: Some(PathBuf::from("/from/toml.json")),
            ..Default::default()
        };

        // TOML only
        assert_eq!(
            resolve_lexicon_path(None, &toml_config),
            Some(PathBuf::from("/from/toml.json"))
        );

        // ENV beats TOML
        std::env::set_var("OLY_LEXICON_PATH", "/from/env.json");
        assert_eq!(
            resolve_lexicon_path(None, &toml_config),
            Some(PathBuf::from("/from/env.json"))
        );

        // CLI beats ENV
        let cli = PathBuf::from("/from/cli.json");
        assert_eq!(
            resolve_lexicon_path(Some(&cli), &toml_config),
            Some(PathBuf::from("/from/cli.json"))
        );

        std::env::remove_var("OLY_LEXICON_PATH");
    }

    #[test]
    #[serial]
    fn test_lexicon_resolution_none() {
        std::env::remove_var("OLY_LEXICON_PATH");
        let toml_config = TomlConfig::default();
        assert_eq!(resolve_lexicon_path(None, &toml_config), None);
    }

    #[test]
    #[serial]
    fn test_env_config_path() {
        std::env::set_var("OLY_CONFIG", "/tmp/oly-test.toml");
        assert_eq!(resolve_config_path(), Some(PathBuf::from("/tmp/oly-test.toml")));
        std::env::remove_var("OLY_CONFIG");
    }

    #[test]
    #[serial]
    fn test_load_config_from_env_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oly-ad.toml");
        std::fs::write(&path, "min_word_count = 42\n").unwrap();

        std::env::set_var("OLY_CONFIG", &path);
        let config = load_toml_config().unwrap();
        assert_eq!(config.min_word_count, Some(42));
        std::env::remove_var("OLY_CONFIG");
    }

    #[test]
    #[serial]
    fn test_broken_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oly-ad.toml");
        std::fs::write(&path, "min_word_count = \"not a number\"\n").unwrap();

        std::env::set_var("OLY_CONFIG", &path);
        let result = load_toml_config();
        assert!(matches!(result, Err(Error::Config(_))));
        std::env::remove_var("OLY_CONFIG");
    }
}
