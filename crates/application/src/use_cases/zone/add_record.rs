use crate::ports::ZoneStore;
use orbital_dns_domain::{
    DomainError, DomainName, RecordData, RecordValue, SeedRecord, ZoneRecord,
};
use std::net::Ipv6Addr;
use std::sync::Arc;
use tracing::info;

/// Validates and stores an IPv6 host record.
pub struct AddZoneRecordUseCase {
    zone: Arc<dyn ZoneStore>,
    answer_ttl: u32,
}

impl AddZoneRecordUseCase {
    pub fn new(zone: Arc<dyn ZoneStore>, answer_ttl: u32) -> Self {
        Self { zone, answer_ttl }
    }

    pub fn execute(&self, domain: &str, ipv6: &str) -> Result<ZoneRecord, DomainError> {
        let domain = domain.trim();
        let ipv6 = ipv6.trim();

        if domain.is_empty() {
            return Err(DomainError::MissingField("domain"));
        }
        if ipv6.is_empty() {
            return Err(DomainError::MissingField("ipv6"));
        }

        let name = DomainName::parse(domain)?;
        let address: Ipv6Addr = ipv6
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(ipv6.to_string()))?;

        let value = RecordValue::new(RecordData::Aaaa(address), self.answer_ttl);
        self.zone.add_record(name.clone(), value.clone());

        info!(domain = %name, ipv6 = %address, ttl = self.answer_ttl, "Added zone record");

        Ok(ZoneRecord::new(name, value))
    }

    /// Stores every seed record, stopping at the first invalid one.
    pub fn seed(&self, records: &[SeedRecord]) -> Result<usize, DomainError> {
        for record in records {
            self.execute(&record.domain, &record.ipv6)?;
        }
        Ok(records.len())
    }
}
