use super::DnsServices;
use anyhow::Context;
use orbital_dns_application::ports::ZoneStore;
use orbital_dns_application::use_cases::{AddZoneRecordUseCase, ResolveQueryUseCase};
use orbital_dns_domain::Config;
use std::sync::Arc;
use tracing::info;

pub struct UseCases {
    pub resolve_query: Arc<ResolveQueryUseCase>,
    pub add_zone_record: Arc<AddZoneRecordUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, dns: &DnsServices) -> anyhow::Result<Self> {
        let add_zone_record = Arc::new(AddZoneRecordUseCase::new(
            dns.zone.clone(),
            config.dns.answer_ttl,
        ));
        add_zone_record
            .seed(&config.zone.records)
            .context("Failed to seed zone records")?;

        let resolve_query = Arc::new(
            ResolveQueryUseCase::new(dns.zone.clone(), dns.forwarder.clone())
                .with_forward_mode(config.dns.forward_mode),
        );

        info!(
            records = dns.zone.len(),
            forward_mode = resolve_query.forward_mode().as_str(),
            "Zone ready"
        );

        Ok(Self {
            resolve_query,
            add_zone_record,
        })
    }
}
