use async_trait::async_trait;
use orbital_dns_application::ports::{UpstreamForwarder, ZoneStore};
use orbital_dns_domain::{
    DnsQuery, DnsResponse, DomainError, DomainName, RecordKey, RecordType, RecordValue,
};
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

#[derive(Default)]
pub struct MockZoneStore {
    records: RwLock<HashMap<RecordKey, RecordValue>>,
    lookups: Mutex<Vec<RecordKey>>,
}

impl MockZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, name: &str, value: RecordValue) -> Self {
        self.add_record(DomainName::new(name), value);
        self
    }

    pub fn lookups(&self) -> Vec<RecordKey> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn get(&self, name: &str, record_type: RecordType) -> Option<RecordValue> {
        self.records
            .read()
            .unwrap()
            .get(&RecordKey::new(name, record_type))
            .cloned()
    }
}

impl ZoneStore for MockZoneStore {
    fn add_record(&self, name: DomainName, value: RecordValue) {
        let key = RecordKey::new(name, value.record_type());
        self.records.write().unwrap().insert(key, value);
    }

    fn lookup(&self, name: &DomainName, record_type: RecordType) -> Option<RecordValue> {
        let key = RecordKey::new(name.clone(), record_type);
        self.lookups.lock().unwrap().push(key.clone());
        self.records.read().unwrap().get(&key).cloned()
    }

    fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

enum ForwarderBehavior {
    Reply(DnsResponse),
    Fail(DomainError),
}

/// Records every forwarded query and answers with a fixed reply or error.
pub struct MockForwarder {
    behavior: ForwarderBehavior,
    calls: Mutex<Vec<DnsQuery>>,
}

impl MockForwarder {
    pub fn replying(response: DnsResponse) -> Self {
        Self {
            behavior: ForwarderBehavior::Reply(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            behavior: ForwarderBehavior::Fail(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self::failing(DomainError::TransportAllServersUnreachable)
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl UpstreamForwarder for MockForwarder {
    async fn forward(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError> {
        self.calls.lock().unwrap().push(query.clone());
        match &self.behavior {
            ForwarderBehavior::Reply(response) => {
                let mut response = response.clone();
                response.id = query.id;
                Ok(response)
            }
            ForwarderBehavior::Fail(error) => Err(error.clone()),
        }
    }
}
