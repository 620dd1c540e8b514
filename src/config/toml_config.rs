use crate::config::{Settings, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SETTLE_DELAY_MS};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub gateway: GatewayConfig,
    pub search: Option<SearchConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub url: String,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub settle_delay_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn into_settings(self) -> Settings {
        Settings {
            gateway_url: self.gateway.url,
            settle_delay_ms: self
                .search
                .and_then(|s| s.settle_delay_ms)
                .unwrap_or(DEFAULT_SETTLE_DELAY_MS),
            request_timeout_secs: self
                .gateway
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("gateway.url", &self.gateway.url)?;
        if let Some(timeout) = self.gateway.request_timeout_secs {
            validation::validate_range("gateway.request_timeout_secs", timeout, 1, 300)?;
        }
        if let Some(settle) = self.search.as_ref().and_then(|s| s.settle_delay_ms) {
            validation::validate_range("search.settle_delay_ms", settle, 0, 10_000)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_full_config() {
        let file = write_config(
            r#"
[gateway]
url = "https://ep.example.com/proxy"
request_timeout_secs = 10

[search]
settle_delay_ms = 150
"#,
        );

        let settings = TomlConfig::from_file(file.path()).unwrap().into_settings();
        assert_eq!(settings.gateway_url, "https://ep.example.com/proxy");
        assert_eq!(settings.request_timeout_secs, 10);
        assert_eq!(settings.settle_delay_ms, 150);
    }

    #[test]
    fn missing_optionals_fall_back_to_defaults() {
        let file = write_config(
            r#"
[gateway]
url = "https://ep.example.com/proxy"
"#,
        );

        let settings = TomlConfig::from_file(file.path()).unwrap().into_settings();
        assert_eq!(settings.settle_delay_ms, DEFAULT_SETTLE_DELAY_MS);
        assert_eq!(settings.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn rejects_bad_gateway_url() {
        let file = write_config(
            r#"
[gateway]
url = "ftp://ep.example.com"
"#,
        );

        assert!(TomlConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn rejects_out_of_range_settle_delay() {
        let file = write_config(
            r#"
[gateway]
url = "https://ep.example.com/proxy"

[search]
settle_delay_ms = 60000
"#,
        );

        assert!(TomlConfig::from_file(file.path()).is_err());
    }
}
