use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::errors::{EmpathError, EmpathResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> EmpathResult<()> {
    let config_path = get_config_path()?;

    let mut config = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| EmpathError::config_error(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&config_str)
            .map_err(|e| EmpathError::config_error(format!("Failed to parse config: {}", e)))?
    } else {
        // First run: write defaults so the file is there to edit
        let config = Config::default();

        fs::create_dir_all(config_path.parent().unwrap_or(&config_path)).map_err(|e| {
            EmpathError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| EmpathError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| EmpathError::config_error(format!("Failed to write config file: {}", e)))?;

        config
    };

    // Env var wins over the file, so a session can be pointed at another server
    if let Ok(url) = env::var("EMPATH_BASE_URL") {
        config.base_url = url;
    }

    validate_config(&config)?;

    *CONFIG.write().unwrap() = config;

    Ok(())
}

fn get_config_path() -> EmpathResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| EmpathError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("empath").join("config.json"))
}

fn validate_config(config: &Config) -> EmpathResult<()> {
    if config.base_url.is_empty() {
        return Err(EmpathError::config_error("base_url is required"));
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(EmpathError::config_error(
            "base_url must start with http:// or https://",
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(EmpathError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> EmpathResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    let config_str = serde_json::to_string_pretty(&updated_config)
        .map_err(|e| EmpathError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(&config_path, config_str)
        .map_err(|e| EmpathError::config_error(format!("Failed to write config file: {}", e)))?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_base_url() {
        let mut config = Config::default();
        config.base_url = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_rejects_bare_host() {
        let mut config = Config::default();
        config.base_url = "localhost:5000".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_zero_timeout() {
        let mut config = Config::default();
        config.request_timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_round_trips_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.base_url = "http://10.0.0.2:8080".to_string();
        config.request_timeout_secs = 7;

        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded: Config = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.base_url, "http://10.0.0.2:8080");
        assert_eq!(loaded.request_timeout_secs, 7);
        assert_eq!(loaded.log_level, "info");
    }
}
