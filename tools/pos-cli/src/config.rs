//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use pos_client::{HttpBackend, TimeoutConfig, DEFAULT_API_URL};
use pos_core::wire::RegisterIdentity;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Backend connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Register identity sent with purchases.
    #[serde(default)]
    pub register: RegisterConfig,
}

/// Values given on the command line or in the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply command line and environment overrides.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(url) = overrides.api_url {
            self.api.url = url;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.api.timeout_secs = secs;
        }
        self
    }

    /// Check the config, returning `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        match HttpBackend::new(&self.api.url, self.api.timeout()) {
            Ok(backend) => {
                let scheme = backend.base_url().scheme();
                if scheme != "http" && scheme != "https" {
                    warnings.push(format!("api.url uses unusual scheme '{}'", scheme));
                }
            }
            Err(e) => errors.push(format!("api.url is invalid: {}", e)),
        }

        if self.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than 0".to_string());
        }

        for (key, value) in [
            ("register.employee_code", &self.register.employee_code),
            ("register.store_code", &self.register.store_code),
            ("register.pos_no", &self.register.pos_no),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{} is required", key));
            }
        }

        (errors, warnings)
    }

    /// Get a value by dot-separated key.
    pub fn get(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "url"] => Ok(self.api.url.clone()),
            ["api", "timeout_secs"] => Ok(self.api.timeout_secs.to_string()),
            ["register", "employee_code"] => Ok(self.register.employee_code.clone()),
            ["register", "store_code"] => Ok(self.register.store_code.clone()),
            ["register", "pos_no"] => Ok(self.register.pos_no.clone()),
            _ => bail!("Unknown config key: {}", key),
        }
    }

    /// Set a value by dot-separated key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["api", "url"] => self.api.url = value.to_string(),
            ["api", "timeout_secs"] => {
                self.api.timeout_secs = value
                    .parse()
                    .with_context(|| format!("api.timeout_secs must be a number, got '{}'", value))?
            }
            ["register", "employee_code"] => self.register.employee_code = value.to_string(),
            ["register", "store_code"] => self.register.store_code = value.to_string(),
            ["register", "pos_no"] => self.register.pos_no = value.to_string(),
            _ => bail!("Unknown config key: {}", key),
        }

        Ok(())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl ApiConfig {
    pub fn timeout(&self) -> TimeoutConfig {
        TimeoutConfig::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Register identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// Operator code (`EMP_CD`).
    #[serde(default = "default_employee_code")]
    pub employee_code: String,

    /// Store code (`STORE_CD`).
    #[serde(default = "default_store_code")]
    pub store_code: String,

    /// Register number (`POS_NO`).
    #[serde(default = "default_pos_no")]
    pub pos_no: String,
}

fn default_employee_code() -> String {
    RegisterIdentity::default().employee_code
}

fn default_store_code() -> String {
    RegisterIdentity::default().store_code
}

fn default_pos_no() -> String {
    RegisterIdentity::default().pos_no
}

impl RegisterConfig {
    pub fn identity(&self) -> RegisterIdentity {
        RegisterIdentity {
            employee_code: self.employee_code.clone(),
            store_code: self.store_code.clone(),
            pos_no: self.pos_no.clone(),
        }
    }
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            employee_code: default_employee_code(),
            store_code: default_store_code(),
            pos_no: default_pos_no(),
        }
    }
}

/// Generate a default pos.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# POS register configuration

[api]
# Overridden by --api-url or POS_API_URL.
url = "{url}"
timeout_secs = {timeout}

[register]
employee_code = "{emp}"
store_code = "{store}"
pos_no = "{pos}"
"#,
        url = DEFAULT_API_URL,
        timeout = default_timeout_secs(),
        emp = default_employee_code(),
        store = default_store_code(),
        pos = default_pos_no(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.api.url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.register.identity(), RegisterIdentity::default());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: CliConfig = toml::from_str("[register]\npos_no = \"12\"\n").unwrap();
        assert_eq!(config.register.pos_no, "12");
        assert_eq!(config.register.store_code, "30");
        assert_eq!(config.api.url, DEFAULT_API_URL);
    }

    #[test]
    fn test_load_and_save_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pos.json");

        let mut config = CliConfig::default();
        config.set("api.url", "http://register.local:9000").unwrap();
        config.save(&path).unwrap();

        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded.api.url, "http://register.local:9000");
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pos.toml");
        std::fs::write(&path, "[api\nurl = ").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_overrides_win() {
        let config = CliConfig::default().with_overrides(Overrides {
            api_url: Some("https://pos.example.com".to_string()),
            timeout_secs: Some(5),
        });
        assert_eq!(config.api.url, "https://pos.example.com");
        assert_eq!(config.api.timeout(), TimeoutConfig::from_secs(5));
    }

    #[test]
    fn test_get_set() {
        let mut config = CliConfig::default();
        config.set("register.employee_code", "0000000001").unwrap();
        assert_eq!(config.get("register.employee_code").unwrap(), "0000000001");

        assert!(config.set("api.timeout_secs", "soon").is_err());
        assert!(config.get("register.till").is_err());
    }

    #[test]
    fn test_validate() {
        let (errors, warnings) = CliConfig::default().validate();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        let mut config = CliConfig::default();
        config.api.url = "localhost".to_string();
        config.api.timeout_secs = 0;
        config.register.pos_no = " ".to_string();
        let (errors, _) = config.validate();
        assert_eq!(errors.len(), 3);

        config = CliConfig::default();
        config.api.url = "ftp://files.example.com".to_string();
        let (errors, warnings) = config.validate();
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }
}
