use anyhow::Context;
use orbital_dns_domain::config::ServerConfig;
use orbital_dns_infrastructure::system::discover_interface_address;
use std::net::IpAddr;
use tracing::info;

/// The configured interface's address if one is named, else `bind_address`.
pub fn resolve_listen_address(config: &ServerConfig) -> anyhow::Result<IpAddr> {
    if let Some(interface) = &config.interface {
        return discover_interface_address(interface)
            .with_context(|| format!("Failed to find an address on interface '{}'", interface));
    }

    let address: IpAddr = config
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.bind_address))?;

    info!(address = %address, "Using configured bind address");
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_without_interface() {
        let config = ServerConfig {
            bind_address: "::1".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(
            resolve_listen_address(&config).unwrap(),
            "::1".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn test_invalid_bind_address() {
        let config = ServerConfig {
            bind_address: "not-an-ip".to_string(),
            ..ServerConfig::default()
        };
        assert!(resolve_listen_address(&config).is_err());
    }

    #[test]
    fn test_missing_interface_is_fatal() {
        let config = ServerConfig {
            interface: Some("orbital-test-no-such-if0".to_string()),
            ..ServerConfig::default()
        };
        assert!(resolve_listen_address(&config).is_err());
    }
}
