use dashmap::DashMap;
use orbital_dns_application::ports::ZoneStore;
use orbital_dns_domain::{DomainName, RecordKey, RecordType, RecordValue};
use rustc_hash::FxBuildHasher;
use tracing::debug;

/// Process-wide record map, sharded so lookups on one name never wait on a
/// write to another.
pub struct InMemoryZoneStore {
    records: DashMap<RecordKey, RecordValue, FxBuildHasher>,
}

impl InMemoryZoneStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::with_hasher(FxBuildHasher),
        }
    }
}

impl Default for InMemoryZoneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneStore for InMemoryZoneStore {
    fn add_record(&self, name: DomainName, value: RecordValue) {
        let key = RecordKey::new(name, value.record_type());
        debug!(record = %key, data = %value.data, ttl = value.ttl, "Storing zone record");
        self.records.insert(key, value);
    }

    fn lookup(&self, name: &DomainName, record_type: RecordType) -> Option<RecordValue> {
        let key = RecordKey::new(name.clone(), record_type);
        self.records.get(&key).map(|entry| entry.value().clone())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbital_dns_domain::RecordData;

    fn aaaa(ip: &str) -> RecordValue {
        RecordValue::new(RecordData::Aaaa(ip.parse().unwrap()), 300)
    }

    #[test]
    fn test_lookup_after_add() {
        let store = InMemoryZoneStore::new();
        store.add_record(DomainName::new("hello.orbital"), aaaa("2001:db8::1"));

        let found = store.lookup(&DomainName::new("hello.orbital"), RecordType::AAAA);
        assert_eq!(found, Some(aaaa("2001:db8::1")));
    }

    #[test]
    fn test_lookup_is_keyed_by_type() {
        let store = InMemoryZoneStore::new();
        store.add_record(DomainName::new("hello.orbital"), aaaa("2001:db8::1"));

        assert!(store
            .lookup(&DomainName::new("hello.orbital"), RecordType::A)
            .is_none());
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryZoneStore::default();
        assert!(store.is_empty());
        assert!(store
            .lookup(&DomainName::new("anything.orbital"), RecordType::AAAA)
            .is_none());
    }
}
