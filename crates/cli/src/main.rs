use anyhow::Context;
use clap::Parser;
use orbital_dns_domain::CliOverrides;
use orbital_dns_infrastructure::tls::load_server_config;
use std::net::SocketAddr;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "orbital-dns")]
#[command(version)]
#[command(about = "Orbital DNS - IPv6 zone server with upstream fallback over UDP and DoH")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Network interface whose address both listeners bind to
    #[arg(short = 'i', long)]
    interface: Option<String>,

    /// Bind address, used when no interface is given
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS (UDP) port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// HTTPS (DoH and zone API) port
    #[arg(short = 'w', long)]
    https_port: Option<u16>,

    /// PEM certificate chain for the HTTPS listener
    #[arg(long, value_name = "FILE")]
    cert: Option<String>,

    /// PEM private key for the HTTPS listener
    #[arg(long, value_name = "FILE")]
    key: Option<String>,

    /// Upstream resolver (ip:port), repeatable
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstreams: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            interface: self.interface.clone(),
            bind_address: self.bind.clone(),
            dns_port: self.dns_port,
            https_port: self.https_port,
            cert_path: self.cert.clone(),
            key_path: self.key.clone(),
            upstream_servers: self.upstreams.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config.logging)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Orbital DNS");

    let listen_ip = bootstrap::resolve_listen_address(&config.server)?;
    let services = di::Services::new(&config)?;

    let tls_config = load_server_config(&config.tls.cert_path, &config.tls.key_path)
        .context("Failed to load TLS certificate and key")?;

    let dns_addr = SocketAddr::new(listen_ip, config.server.dns_port);
    let https_addr = SocketAddr::new(listen_ip, config.server.https_port);

    let udp_socket = server::dns::bind_udp_socket(dns_addr)
        .with_context(|| format!("Failed to bind DNS listener on {}", dns_addr))?;
    let tcp_listener = server::web::bind_https_listener(https_addr)
        .await
        .with_context(|| format!("Failed to bind HTTPS listener on {}", https_addr))?;

    let shutdown = CancellationToken::new();
    let mut listeners = JoinSet::new();

    listeners.spawn(server::start_dns_server(
        udp_socket,
        services.dns_handler,
        shutdown.clone(),
    ));
    listeners.spawn(server::start_web_server(
        tcp_listener,
        tls_config,
        orbital_dns_api::create_routes(services.app_state),
        shutdown.clone(),
    ));

    let outcome = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for shutdown signal")?;
            info!("Shutdown signal received");
            Ok(())
        }
        Some(joined) = listeners.join_next() => match joined {
            Ok(Ok(())) => Err(anyhow::anyhow!("Listener stopped unexpectedly")),
            Ok(Err(e)) => Err(e),
            Err(e) => Err(anyhow::Error::from(e).context("Listener task failed")),
        },
    };

    shutdown.cancel();
    while listeners.join_next().await.is_some() {}

    if let Err(e) = &outcome {
        error!(error = %e, "Server stopped with an error");
    }

    info!("Server shutdown complete");
    outcome
}
