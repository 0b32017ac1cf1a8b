use async_trait::async_trait;
use orbital_dns_domain::{DnsQuery, DnsResponse, DomainError};

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Sends `query` upstream and returns the decoded reply.
    ///
    /// `Ok` with no answers means the upstream answered and had nothing;
    /// `Err` means no usable reply arrived at all.
    async fn forward(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError>;
}
