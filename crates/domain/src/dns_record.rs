mod record;
mod record_type;

pub use record::{RecordData, RecordKey, RecordValue, ZoneRecord};
pub use record_type::RecordType;
