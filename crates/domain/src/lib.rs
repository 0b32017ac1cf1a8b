//! Orbital DNS Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod domain_name;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, ForwardMode, LogFormat, SeedRecord};
pub use dns_query::{DnsClass, DnsQuery, DnsQuestion};
pub use dns_record::{RecordData, RecordKey, RecordType, RecordValue, ZoneRecord};
pub use dns_response::{DnsAnswer, DnsResponse, ResponseCode};
pub use domain_name::DomainName;
pub use errors::DomainError;
