//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command-line flags in `main.rs` may override individual values.
//!
//! ```bash
//! export LISTEN="0.0.0.0:5000"
//! export API_VERSION_MAJOR="1"
//! export API_VERSION_MINOR="0"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `API_VERSION_MAJOR` / `API_VERSION_MINOR` - Reported version (default: `1` / `0`)
//! - `SEED_USERS` - Start with the three seed users (default: `true`)

use anyhow::Result;
use std::env;

use crate::domain::entities::VersionInfo;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub version_major: String,
    pub version_minor: String,
    /// When false the user store starts empty.
    pub seed_users: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let version_major = env::var("API_VERSION_MAJOR").unwrap_or_else(|_| "1".to_string());
        let version_minor = env::var("API_VERSION_MINOR").unwrap_or_else(|_| "0".to_string());

        let seed_users = env::var("SEED_USERS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            version_major,
            version_minor,
            seed_users,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - a version part is empty or contains a `.`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // `major.minor` must split into exactly two parts.
        for (name, part) in [
            ("API_VERSION_MAJOR", &self.version_major),
            ("API_VERSION_MINOR", &self.version_minor),
        ] {
            if part.is_empty() || part.contains('.') {
                anyhow::bail!("{name} must be non-empty and contain no '.', got '{part}'");
            }
        }

        Ok(())
    }

    /// The version descriptor served by `/api/v1/version`.
    pub fn version(&self) -> VersionInfo {
        VersionInfo::new(self.version_major.clone(), self.version_minor.clone())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  API version: {}", self.version().dotted());
        tracing::info!("  Seed users: {}", self.seed_users);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            version_major: "1".to_string(),
            version_minor: "0".to_string(),
            seed_users: true,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "5000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:5000".to_string();

        // Test invalid version parts
        config.version_minor = "0.1".to_string();
        assert!(config.validate().is_err());

        config.version_minor = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_version_descriptor() {
        let mut config = valid_config();
        config.version_major = "2".to_string();
        config.version_minor = "7".to_string();

        assert_eq!(config.version().dotted(), "2.7");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("API_VERSION_MAJOR");
            env::remove_var("API_VERSION_MINOR");
            env::remove_var("SEED_USERS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:5000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.version(), VersionInfo::new("1", "0"));
        assert!(config.seed_users);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("API_VERSION_MAJOR", "3");
            env::set_var("API_VERSION_MINOR", "2");
            env::set_var("SEED_USERS", "false");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.version().dotted(), "3.2");
        assert!(!config.seed_users);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("API_VERSION_MAJOR");
            env::remove_var("API_VERSION_MINOR");
            env::remove_var("SEED_USERS");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_version() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("API_VERSION_MAJOR", "1.2");
        }

        assert!(load_from_env().is_err());

        unsafe {
            env::remove_var("API_VERSION_MAJOR");
        }
    }
}
