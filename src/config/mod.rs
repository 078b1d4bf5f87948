pub mod toml_config;

use crate::adapters::http_source::DEFAULT_BASE_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_USER_AGENT: &str = concat!("contrib-points/", env!("CARGO_PKG_VERSION"));
/// 請求逾時上限（秒）
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contrib-points")]
#[command(about = "Serve trailing contribution counts scraped from public contribution graphs")]
pub struct CliConfig {
    #[arg(long, env = "CONTRIB_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "CONTRIB_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "CONTRIB_SOURCE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub source_base_url: String,

    // 未設定時不限制逾時
    #[arg(long, env = "CONTRIB_REQUEST_TIMEOUT_SECONDS", help = "Timeout for the upstream fetch")]
    pub request_timeout_seconds: Option<u64>,

    #[arg(long, env = "CONTRIB_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, env = "CONTRIB_CONFIG", help = "Load settings from a TOML file instead")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn source_base_url(&self) -> &str {
        &self.source_base_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_common(self)
    }
}

/// CLI 與 TOML 共用的檢查
pub(crate) fn validate_common<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_non_empty_string("server.host", config.host())?;
    validate_range("server.port", config.port(), 1, u16::MAX)?;
    validate_url("source.base_url", config.source_base_url())?;
    validate_non_empty_string("source.user_agent", config.user_agent())?;

    if let Some(timeout) = config.request_timeout() {
        validate_range(
            "source.timeout_seconds",
            timeout.as_secs(),
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::try_parse_from(["contrib-points"]).unwrap();

        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 3000);
        assert_eq!(config.source_base_url(), "https://github.com/users");
        assert_eq!(config.request_timeout(), None);
        assert!(config.user_agent().starts_with("contrib-points/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::try_parse_from([
            "contrib-points",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--request-timeout-seconds",
            "10",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert!(config.verbose);
    }

    #[test]
    fn test_cli_validation_rejects_bad_values() {
        let mut config = CliConfig::try_parse_from(["contrib-points"]).unwrap();
        config.source_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = CliConfig::try_parse_from(["contrib-points"]).unwrap();
        config.port = 0;
        assert!(config.validate().is_err());

        let mut config = CliConfig::try_parse_from(["contrib-points"]).unwrap();
        config.request_timeout_seconds = Some(0);
        assert!(config.validate().is_err());
    }
}
