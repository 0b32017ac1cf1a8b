use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use super::errors::ConfigError;

/// How the resolver forwards a query with at least one local miss.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForwardMode {
    /// Forward the entire original query once and relay every answer.
    #[default]
    WholeQuery,

    /// Forward only the questions the zone could not answer.
    MissedOnly,
}

impl ForwardMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WholeQuery => "whole_query",
            Self::MissedOnly => "missed_only",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream resolvers in the order they are tried.
    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Extra attempts per upstream after the first one fails.
    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// TTL attached to authoritative answers.
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,

    #[serde(default)]
    pub forward_mode: ForwardMode,
}

impl DnsConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn upstream_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.upstream_servers
            .iter()
            .map(|server| {
                server.parse::<SocketAddr>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid upstream server '{}': {}", server, e))
                })
            })
            .collect()
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream_servers: default_upstream_servers(),
            query_timeout_ms: default_query_timeout_ms(),
            retries: default_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            answer_ttl: default_answer_ttl(),
            forward_mode: ForwardMode::default(),
        }
    }
}

fn default_upstream_servers() -> Vec<String> {
    vec!["1.1.1.1:53".to_string()]
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_retries() -> u32 {
    1
}

fn default_retry_backoff_ms() -> u64 {
    100
}

fn default_answer_ttl() -> u32 {
    300
}
