use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Network interface whose first IPv6 address both listeners bind to.
    /// When unset, `bind_address` is used as-is.
    #[serde(default)]
    pub interface: Option<String>,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_https_port")]
    pub https_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            interface: None,
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            https_port: default_https_port(),
        }
    }
}

fn default_bind_address() -> String {
    "::".to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_https_port() -> u16 {
    443
}
