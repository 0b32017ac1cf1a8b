use anyhow::Context;
use orbital_dns_domain::Config;
use orbital_dns_infrastructure::dns::UdpForwarder;
use orbital_dns_infrastructure::zone::InMemoryZoneStore;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub zone: Arc<InMemoryZoneStore>,
    pub forwarder: Arc<UdpForwarder>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let forwarder =
            UdpForwarder::from_config(&config.dns).context("Failed to build upstream forwarder")?;

        info!(
            upstreams = ?config.dns.upstream_servers,
            timeout_ms = config.dns.query_timeout_ms,
            retries = config.dns.retries,
            "Upstream forwarder ready"
        );

        Ok(Self {
            zone: Arc::new(InMemoryZoneStore::new()),
            forwarder: Arc::new(forwarder),
        })
    }
}
