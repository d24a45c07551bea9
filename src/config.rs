// Configuration loading and parsing (portal.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the whole portal.toml file.
#[derive(Debug, Clone, Deserialize)]
struct PortalFile {
    clinic: ClinicConfig,
    database: DatabaseSection,
    api: ApiSection,
    #[serde(default)]
    ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct DatabaseSection {
    path: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiSection {
    port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClinicConfig {
    pub name: String,
    pub doctor: String,
}

/// Artificial latency applied to draft save / consultation submission so the
/// status indicators are visible. Zero disables it; no correctness meaning.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_save_delay")]
    pub save_delay_ms: u64,
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
}

fn default_save_delay() -> u64 {
    600
}

fn default_submit_delay() -> u64 {
    1200
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            save_delay_ms: default_save_delay(),
            submit_delay_ms: default_submit_delay(),
        }
    }
}

/// The assembled application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub clinic: ClinicConfig,
    pub db_path: String,
    pub api_port: u16,
    pub ui: UiConfig,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/portal.toml` relative to the
/// given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy
/// defaults. Prefer `load_config()` which handles default initialization.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let portal_path = base_dir.join("config").join("portal.toml");
    let portal_text = read_file(&portal_path)?;
    let portal_file: PortalFile =
        toml::from_str(&portal_text).map_err(|e| ConfigError::ParseError {
            path: portal_path.clone(),
            source: e,
        })?;

    let config = Config {
        clinic: portal_file.clinic,
        db_path: portal_file.database.path,
        api_port: portal_file.api.port,
        ui: portal_file.ui,
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure config/portal.toml exists by copying it from `defaults/` when
/// missing. Returns the list of files that were copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or create config/portal.toml",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = config_dir.join(file_name);
        if target.exists() {
            continue;
        }

        std::fs::copy(&path, &target).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!(
                "failed to copy {} to {}: {e}",
                path.display(),
                target.display()
            ),
        })?;
        copied.push(target);
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working
/// directory, copying defaults into place first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.clinic.name.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "clinic.name".into(),
            message: "must not be empty".into(),
        });
    }

    if config.clinic.doctor.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "clinic.doctor".into(),
            message: "must not be empty".into(),
        });
    }

    if config.api_port == 0 {
        return Err(ConfigError::ValidationError {
            field: "api.port".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.db_path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "database.path".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID_PORTAL_TOML: &str = r#"
[clinic]
name = "Riverbend Family Clinic"
doctor = "Dr. Sarah Mitchell"

[database]
path = "doctor-portal.db"

[api]
port = 3001

[ui]
save_delay_ms = 600
submit_delay_ms = 1200
"#;

    /// Helper: create a temp base dir containing config/portal.toml with the
    /// given content.
    fn write_config(tag: &str, content: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(format!("portal_config_test_{tag}"));
        let config_dir = tmp.join("config");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("portal.toml"), content).unwrap();
        tmp
    }

    #[test]
    fn load_valid_config() {
        let tmp = write_config("valid", VALID_PORTAL_TOML);
        let config = load_config_from(&tmp).expect("should load valid config");

        assert_eq!(config.clinic.name, "Riverbend Family Clinic");
        assert_eq!(config.clinic.doctor, "Dr. Sarah Mitchell");
        assert_eq!(config.db_path, "doctor-portal.db");
        assert_eq!(config.api_port, 3001);
        assert_eq!(config.ui.save_delay_ms, 600);
        assert_eq!(config.ui.submit_delay_ms, 1200);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ui_section_is_optional() {
        let content = r#"
[clinic]
name = "Clinic"
doctor = "Dr. A"

[database]
path = "x.db"

[api]
port = 3001
"#;
        let tmp = write_config("no_ui", content);
        let config = load_config_from(&tmp).expect("should load without [ui]");
        assert_eq!(config.ui.save_delay_ms, 600);
        assert_eq!(config.ui.submit_delay_ms, 1200);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_clinic_name() {
        let content = VALID_PORTAL_TOML.replace("Riverbend Family Clinic", "  ");
        let tmp = write_config("empty_name", &content);
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "clinic.name");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_zero_api_port() {
        let content = VALID_PORTAL_TOML.replace("port = 3001", "port = 0");
        let tmp = write_config("zero_port", &content);
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "api.port");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_portal_toml() {
        let tmp = std::env::temp_dir().join("portal_config_test_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();

        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::FileNotFound { path } => {
                assert!(path.ends_with("portal.toml"));
            }
            other => panic!("expected FileNotFound, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = write_config("invalid_toml", "this is not valid [[[ toml");
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ParseError { path, .. } => {
                assert!(path.ends_with("portal.toml"));
            }
            other => panic!("expected ParseError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_copies_missing_files() {
        let tmp = std::env::temp_dir().join("portal_config_test_ensure");
        let _ = fs::remove_dir_all(&tmp);

        let defaults_dir = tmp.join("defaults");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::write(defaults_dir.join("portal.toml"), VALID_PORTAL_TOML).unwrap();

        assert!(!tmp.join("config").exists());

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert_eq!(copied.len(), 1);
        assert!(tmp.join("config/portal.toml").exists());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_skips_existing() {
        let tmp = std::env::temp_dir().join("portal_config_test_skips");
        let _ = fs::remove_dir_all(&tmp);

        let defaults_dir = tmp.join("defaults");
        let config_dir = tmp.join("config");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(defaults_dir.join("portal.toml"), VALID_PORTAL_TOML).unwrap();
        fs::write(config_dir.join("portal.toml"), "# custom\n").unwrap();

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert!(copied.is_empty());

        let content = fs::read_to_string(config_dir.join("portal.toml")).unwrap();
        assert_eq!(content, "# custom\n");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_errors_when_both_dirs_missing() {
        let tmp = std::env::temp_dir().join("portal_config_test_both_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let err = ensure_config_files(&tmp).unwrap_err();
        match &err {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("neither defaults/ nor config/"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }
}
