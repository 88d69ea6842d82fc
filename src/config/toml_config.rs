use crate::core::endpoint::DEFAULT_BASE_URL;
use crate::core::output::OutputFormat;
use crate::core::ConfigProvider;
use crate::utils::error::{RailError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RailConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Sent only when set; otherwise requests carry the HTTP client's default headers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    pub format: OutputFormat,
}

impl Default for RailConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
            format: OutputFormat::Json,
        }
    }
}

impl RailConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RailError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RAIL_API_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RailError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for RailConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        if let Some(user_agent) = &self.user_agent {
            validate_non_empty_string("user_agent", user_agent)?;
        }
        Ok(())
    }
}

impl ConfigProvider for RailConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config = RailConfig::from_toml_str("timeout_seconds = 5").unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.user_agent(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_config() {
        let config = RailConfig::from_toml_str(
            r#"
base_url = "https://rail.example.com/realtime.asmx"
timeout_seconds = 10
user_agent = "departures-board/2.0"
format = "csv"
"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "https://rail.example.com/realtime.asmx");
        assert_eq!(config.timeout_seconds(), 10);
        assert_eq!(config.user_agent(), Some("departures-board/2.0"));
        assert_eq!(config.format, OutputFormat::Csv);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("IRISH_RAIL_TEST_BASE_URL", "http://localhost:9999/rail");
        let config = RailConfig::from_toml_str(r#"base_url = "${IRISH_RAIL_TEST_BASE_URL}""#).unwrap();

        assert_eq!(config.base_url, "http://localhost:9999/rail");
    }

    #[test]
    fn test_unset_env_var_left_untouched() {
        let config =
            RailConfig::from_toml_str(r#"user_agent = "${IRISH_RAIL_TEST_UNSET_VARIABLE}""#).unwrap();

        assert_eq!(config.user_agent.as_deref(), Some("${IRISH_RAIL_TEST_UNSET_VARIABLE}"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = RailConfig::from_toml_str("timeout_seconds = \"soon\"");
        assert!(matches!(result, Err(RailError::ConfigError { .. })));
    }

    #[test]
    fn test_validation_rejects_zero_timeout_and_bad_scheme() {
        let config = RailConfig {
            timeout_seconds: 0,
            ..RailConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RailConfig {
            base_url: "ftp://api.irishrail.ie".to_string(),
            ..RailConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RailConfig {
            user_agent: Some("  ".to_string()),
            ..RailConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
