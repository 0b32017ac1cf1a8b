pub mod udp;

use async_trait::async_trait;
use orbital_dns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub server: SocketAddr,
}

/// One request, one reply, against a single upstream.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn server_addr(&self) -> SocketAddr;

    fn protocol_name(&self) -> &'static str;
}
