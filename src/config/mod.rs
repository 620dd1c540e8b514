pub mod toml_config;

use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_GATEWAY_URL: &str = "https://ep.atomicals.xyz/proxy";
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 200;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "realm-search")]
#[command(about = "Search realm name registrations through an ElectrumX gateway")]
pub struct CliConfig {
    /// Realm name to look up
    pub name: Option<String>,

    #[arg(long, default_value = DEFAULT_GATEWAY_URL)]
    pub gateway_url: String,

    /// 送出查詢前的靜止等待（毫秒）
    #[arg(long, default_value = "200")]
    pub settle_delay_ms: u64,

    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    /// List the realms held by this scripthash instead of looking up a name
    #[arg(long)]
    pub scripthash: Option<String>,

    /// Use the built-in mock gateway (no network)
    #[arg(long)]
    pub mock: bool,

    /// Load gateway settings from a TOML file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("gateway_url", &self.gateway_url)?;
        validation::validate_range("settle_delay_ms", self.settle_delay_ms, 0, 10_000)?;
        validation::validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        if let Some(name) = &self.name {
            // 空字串留給 workflow 回報 EmptyQuery，格式錯誤在這裡就擋下
            if !name.trim().is_empty() {
                validation::validate_realm_name("name", name)?;
            }
        }
        if let Some(scripthash) = &self.scripthash {
            validation::validate_non_empty_string("scripthash", scripthash)?;
        }
        Ok(())
    }
}

/// Resolved runtime settings, whichever source they came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub gateway_url: String,
    pub settle_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ConfigProvider for Settings {
    fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(feature = "cli")]
impl From<&CliConfig> for Settings {
    fn from(cli: &CliConfig) -> Self {
        Self {
            gateway_url: cli.gateway_url.clone(),
            settle_delay_ms: cli.settle_delay_ms,
            request_timeout_secs: cli.request_timeout_secs,
        }
    }
}
