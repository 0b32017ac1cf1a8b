use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;
use std::path::Path;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::tls::TlsConfig;
use super::zone::ZoneConfig;
use crate::DomainName;

const LOCAL_CONFIG_PATH: &str = "orbital-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/orbital-dns/config.toml";

/// Main configuration structure for Orbital DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (interface, ports)
    #[serde(default)]
    pub server: ServerConfig,

    /// Certificate and key for the HTTPS listener
    #[serde(default)]
    pub tls: TlsConfig,

    /// Upstream forwarding and answer policy
    #[serde(default)]
    pub dns: DnsConfig,

    /// Records seeded into the zone at startup
    #[serde(default)]
    pub zone: ZoneConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. orbital-dns.toml in current directory
    /// 3. /etc/orbital-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(interface) = overrides.interface {
            self.server.interface = Some(interface);
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.https_port {
            self.server.https_port = port;
        }
        if let Some(cert) = overrides.cert_path {
            self.tls.cert_path = cert;
        }
        if let Some(key) = overrides.key_path {
            self.tls.key_path = key;
        }
        if !overrides.upstream_servers.is_empty() {
            self.dns.upstream_servers = overrides.upstream_servers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.server.https_port == 0 {
            return Err(ConfigError::Validation(
                "HTTPS port cannot be 0".to_string(),
            ));
        }

        if self.dns.upstream_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No upstream servers configured".to_string(),
            ));
        }
        self.dns.upstream_addrs()?;

        if self.dns.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout must be greater than 0".to_string(),
            ));
        }

        for record in &self.zone.records {
            DomainName::parse(&record.domain).map_err(|e| {
                ConfigError::Validation(format!("Zone record '{}': {}", record.domain, e))
            })?;
            record.ipv6.trim().parse::<Ipv6Addr>().map_err(|e| {
                ConfigError::Validation(format!(
                    "Zone record '{}' has invalid ipv6 '{}': {}",
                    record.domain, record.ipv6, e
                ))
            })?;
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub interface: Option<String>,
    pub bind_address: Option<String>,
    pub dns_port: Option<u16>,
    pub https_port: Option<u16>,
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
    pub upstream_servers: Vec<String>,
    pub log_level: Option<String>,
}
