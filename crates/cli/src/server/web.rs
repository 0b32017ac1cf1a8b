use axum::Router;
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use rustls::ServerConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio_rustls::server::TlsStream;
use tokio_rustls::TlsAcceptor;
use tokio_util::sync::CancellationToken;
use tower::Service;
use tracing::{debug, info, warn};

const TLS_HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn bind_https_listener(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}

/// Serves the DoH and zone routes over TLS until `shutdown` fires.
pub async fn start_web_server(
    listener: TcpListener,
    tls_config: Arc<ServerConfig>,
    app: Router,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let bind_addr = listener.local_addr()?;
    info!(
        bind_address = %bind_addr,
        doh_url = format!("https://{}/dns-query", bind_addr),
        "HTTPS server ready"
    );

    let acceptor = TlsAcceptor::from(tls_config);

    loop {
        let (stream, peer) = tokio::select! {
            _ = shutdown.cancelled() => break,
            accepted = listener.accept() => match accepted {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "TCP accept error");
                    continue;
                }
            },
        };

        let acceptor = acceptor.clone();
        let app = app.clone();

        tokio::spawn(async move {
            let Some(tls_stream) =
                tls_handshake(&acceptor, stream, peer, TLS_HANDSHAKE_TIMEOUT).await
            else {
                return;
            };

            let service = hyper::service::service_fn(move |request: hyper::Request<Incoming>| {
                app.clone().call(request)
            });

            if let Err(e) = auto::Builder::new(TokioExecutor::new())
                .serve_connection(TokioIo::new(tls_stream), service)
                .await
            {
                debug!(peer = %peer, error = %e, "HTTPS connection ended with error");
            }
        });
    }

    info!("HTTPS server stopped");
    Ok(())
}

async fn tls_handshake(
    acceptor: &TlsAcceptor,
    stream: TcpStream,
    peer: SocketAddr,
    limit: Duration,
) -> Option<TlsStream<TcpStream>> {
    match tokio::time::timeout(limit, acceptor.accept(stream)).await {
        Ok(Ok(tls_stream)) => Some(tls_stream),
        Ok(Err(e)) => {
            debug!(peer = %peer, error = %e, "TLS handshake failed");
            None
        }
        Err(_) => {
            debug!(peer = %peer, "TLS handshake timed out");
            None
        }
    }
}
