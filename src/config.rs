//! Configuration management for the formcheck front end
//!
//! Built-in defaults, overridden by an optional `formcheck.toml` in the
//! working directory, overridden in turn by `FORMCHECK_*` environment
//! variables. Validation rules are fixed and never read from configuration.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Default configuration file name, without extension.
pub const CONFIG_FILE: &str = "formcheck";

/// Prefix for environment overrides, e.g. `FORMCHECK_SUCCESS_MARKER`.
pub const ENV_PREFIX: &str = "FORMCHECK";

#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    /// Written before each command is read
    pub prompt: String,

    /// Style marker applied to a successful submission
    pub success_marker: String,

    /// Style marker applied to each error line of a failed submission
    pub error_marker: String,

    /// Print the command list when a session starts
    pub show_banner: bool,

    /// Default log filter; `RUST_LOG` takes precedence
    pub log_level: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            success_marker: "success".to_string(),
            error_marker: "error".to_string(),
            show_banner: true,
            log_level: "info".to_string(),
        }
    }
}

impl FrontendConfig {
    /// Load configuration from `formcheck.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from the given file (if present) with environment overrides
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        Self::load_layered(path, ENV_PREFIX)
    }

    fn load_layered(path: &str, env_prefix: &str) -> Result<Self, config::ConfigError> {
        let defaults = FrontendConfig::default();

        let settings = Config::builder()
            .set_default("prompt", defaults.prompt)?
            .set_default("success_marker", defaults.success_marker)?
            .set_default("error_marker", defaults.error_marker)?
            .set_default("show_banner", defaults.show_banner)?
            .set_default("log_level", defaults.log_level)?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: FrontendConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.success_marker.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "success_marker cannot be empty".into(),
            ));
        }

        if self.error_marker.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "error_marker cannot be empty".into(),
            ));
        }

        if self.success_marker == self.error_marker {
            return Err(config::ConfigError::Message(
                "success_marker and error_marker must differ".into(),
            ));
        }

        if self.log_level.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "log_level cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FrontendConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = FrontendConfig::load_from("does-not-exist/formcheck").unwrap();
        assert_eq!(config.success_marker, "success");
        assert_eq!(config.error_marker, "error");
        assert!(config.show_banner);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("formcheck-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("formcheck.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "prompt = \"form> \"").unwrap();
        writeln!(file, "show_banner = false").unwrap();

        let config = FrontendConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.prompt, "form> ");
        assert!(!config.show_banner);
        assert_eq!(config.error_marker, "error");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_environment_overrides_defaults() {
        // Own prefix so the other tests never see these variables
        let prefix = "FORMCHECK_ENVTEST";
        unsafe {
            std::env::set_var("FORMCHECK_ENVTEST_SUCCESS_MARKER", "ok");
            std::env::set_var("FORMCHECK_ENVTEST_SHOW_BANNER", "false");
        }

        let config = FrontendConfig::load_layered("does-not-exist/formcheck", prefix).unwrap();

        unsafe {
            std::env::remove_var("FORMCHECK_ENVTEST_SUCCESS_MARKER");
            std::env::remove_var("FORMCHECK_ENVTEST_SHOW_BANNER");
        }

        assert_eq!(config.success_marker, "ok");
        assert!(!config.show_banner);
        assert_eq!(config.error_marker, "error");
    }

    #[test]
    fn test_rejects_empty_log_level() {
        let config = FrontendConfig {
            log_level: String::new(),
            ..FrontendConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_identical_markers() {
        let config = FrontendConfig {
            error_marker: "success".to_string(),
            ..FrontendConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_marker() {
        let config = FrontendConfig {
            success_marker: "  ".to_string(),
            ..FrontendConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
