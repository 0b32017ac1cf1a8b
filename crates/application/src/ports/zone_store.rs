use orbital_dns_domain::{DomainName, RecordType, RecordValue};

/// Authoritative record storage shared by every request task.
///
/// Implementations must be safe for concurrent use: a `lookup` may never
/// observe a partially applied `add_record`.
pub trait ZoneStore: Send + Sync {
    /// Inserts or overwrites the entry for `name` and the type implied by
    /// `value`. The value is stored as given.
    fn add_record(&self, name: DomainName, value: RecordValue);

    fn lookup(&self, name: &DomainName, record_type: RecordType) -> Option<RecordValue>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
