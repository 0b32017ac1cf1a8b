use orbital_dns_infrastructure::dns::DnsRequestHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const MAX_DATAGRAM_SIZE: usize = 4096;

pub fn bind_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

/// Serves DNS over UDP until `shutdown` fires. Each datagram is handled on
/// its own task so a slow upstream only delays its own client.
pub async fn start_dns_server(
    socket: UdpSocket,
    handler: DnsRequestHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket = Arc::new(socket);
    info!(bind_address = %socket.local_addr()?, "DNS server ready");

    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    loop {
        let (len, client) = tokio::select! {
            _ = shutdown.cancelled() => break,
            received = socket.recv_from(&mut recv_buf) => match received {
                Ok(received) => received,
                Err(e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        let datagram = recv_buf[..len].to_vec();
        let handler = handler.clone();
        let socket = socket.clone();

        tokio::spawn(async move {
            if let Some(reply) = handler.handle_datagram(&datagram, client).await {
                if let Err(e) = socket.send_to(&reply, client).await {
                    debug!(client = %client, error = %e, "Failed to send DNS reply");
                }
            }
        });
    }

    info!("DNS server stopped");
    Ok(())
}
