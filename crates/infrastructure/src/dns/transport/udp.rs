//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Truncated replies are passed through
//! untouched; there is no TCP retry.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use orbital_dns_domain::DomainError;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn io_error(&self, e: io::Error) -> DomainError {
        let server = self.server_addr.to_string();
        match e.kind() {
            io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
            _ => DomainError::TransportError {
                server,
                message: e.to_string(),
            },
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Ephemeral port in the upstream's address family
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.io_error(e))?;

        // Connected socket: the kernel drops datagrams from other sources
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.io_error(e))?;

        let exchange = async {
            let bytes_sent = socket.send(message_bytes).await?;
            debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

            let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
            let bytes_received = socket.recv(&mut recv_buf).await?;
            recv_buf.truncate(bytes_received);
            Ok::<_, io::Error>(recv_buf)
        };

        let bytes = match tokio::time::timeout(timeout, exchange).await {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => {
                warn!(server = %self.server_addr, error = %e, "UDP exchange failed");
                return Err(self.io_error(e));
            }
            Err(_) => {
                return Err(DomainError::TransportTimeout {
                    server: self.server_addr.to_string(),
                })
            }
        };

        debug!(
            server = %self.server_addr,
            bytes_received = bytes.len(),
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes,
            server: self.server_addr,
        })
    }

    fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
