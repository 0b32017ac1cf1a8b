use super::RecordType;
use crate::DomainName;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Answer payload. The variant decides which record type it answers for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(DomainName),
    /// Any other record, kept as uninterpreted RDATA.
    Opaque {
        record_type: RecordType,
        rdata: Vec<u8>,
    },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Aaaa(_) => RecordType::AAAA,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Opaque { record_type, .. } => *record_type,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Aaaa(addr) => write!(f, "{}", addr),
            RecordData::Cname(target) => write!(f, "{}", target),
            RecordData::Opaque { record_type, rdata } => {
                write!(f, "{} ({} bytes)", record_type, rdata.len())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordValue {
    pub data: RecordData,
    pub ttl: u32,
}

impl RecordValue {
    pub fn new(data: RecordData, ttl: u32) -> Self {
        Self { data, ttl }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub name: DomainName,
    pub record_type: RecordType,
}

impl RecordKey {
    pub fn new(name: impl Into<DomainName>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.record_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    pub key: RecordKey,
    pub value: RecordValue,
}

impl ZoneRecord {
    pub fn new(name: impl Into<DomainName>, value: RecordValue) -> Self {
        Self {
            key: RecordKey::new(name, value.record_type()),
            value,
        }
    }
}
