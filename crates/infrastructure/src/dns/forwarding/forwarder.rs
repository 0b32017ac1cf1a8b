use crate::dns::transport::{DnsTransport, UdpTransport};
use crate::dns::wire::WireCodec;
use async_trait::async_trait;
use orbital_dns_application::ports::UpstreamForwarder;
use orbital_dns_domain::config::DnsConfig;
use orbital_dns_domain::{DnsQuery, DnsResponse, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// Relays queries to an ordered list of upstream resolvers.
///
/// Each upstream gets `1 + retries` attempts, spaced by an exponential
/// backoff, before the next one is tried. The first reply that decodes and
/// carries the query's id wins.
pub struct UdpForwarder {
    upstreams: Vec<Box<dyn DnsTransport>>,
    timeout: Duration,
    retries: u32,
    retry_backoff: Duration,
}

impl UdpForwarder {
    pub fn new(upstreams: Vec<SocketAddr>, timeout: Duration) -> Self {
        let upstreams = upstreams
            .into_iter()
            .map(|addr| Box::new(UdpTransport::new(addr)) as Box<dyn DnsTransport>)
            .collect();
        Self::with_transports(upstreams, timeout)
    }

    pub fn with_transports(upstreams: Vec<Box<dyn DnsTransport>>, timeout: Duration) -> Self {
        Self {
            upstreams,
            timeout,
            retries: 0,
            retry_backoff: Duration::ZERO,
        }
    }

    pub fn from_config(config: &DnsConfig) -> Result<Self, DomainError> {
        let upstreams = config
            .upstream_addrs()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;
        Ok(Self::new(upstreams, config.query_timeout())
            .with_retries(config.retries, config.retry_backoff()))
    }

    pub fn with_retries(mut self, retries: u32, retry_backoff: Duration) -> Self {
        self.retries = retries;
        self.retry_backoff = retry_backoff;
        self
    }

    async fn exchange(
        &self,
        transport: &dyn DnsTransport,
        query: &DnsQuery,
        request: &[u8],
    ) -> Result<DnsResponse, DomainError> {
        let reply = transport.send(request, self.timeout).await?;
        let response = WireCodec::decode_response(&reply.bytes)?;

        if response.id != query.id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "id mismatch from {}: expected {}, got {}",
                reply.server, query.id, response.id
            )));
        }

        Ok(response)
    }

    fn backoff_for(&self, attempt: u32) -> Duration {
        self.retry_backoff
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

#[async_trait]
impl UpstreamForwarder for UdpForwarder {
    async fn forward(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError> {
        let request = WireCodec::encode_query(query)?;
        let mut last_error = None;

        for transport in &self.upstreams {
            for attempt in 0..=self.retries {
                if attempt > 0 {
                    tokio::time::sleep(self.backoff_for(attempt)).await;
                }

                match self.exchange(transport.as_ref(), query, &request).await {
                    Ok(response) => {
                        debug!(
                            server = %transport.server_addr(),
                            id = query.id,
                            attempt,
                            answers = response.answers.len(),
                            "Upstream answered"
                        );
                        return Ok(response);
                    }
                    Err(e) => {
                        warn!(
                            server = %transport.server_addr(),
                            protocol = transport.protocol_name(),
                            id = query.id,
                            attempt,
                            error = %e,
                            "Upstream attempt failed"
                        );
                        last_error = Some(e);
                    }
                }
            }
        }

        Err(last_error.unwrap_or(DomainError::TransportAllServersUnreachable))
    }
}
