use crate::{DnsClass, DnsQuery, DnsQuestion, DomainName, RecordData, RecordType, ZoneRecord};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Unknown(u16),
}

impl ResponseCode {
    pub fn to_u16(&self) -> u16 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::NoError => f.write_str("NOERROR"),
            ResponseCode::FormErr => f.write_str("FORMERR"),
            ResponseCode::ServFail => f.write_str("SERVFAIL"),
            ResponseCode::NXDomain => f.write_str("NXDOMAIN"),
            ResponseCode::NotImp => f.write_str("NOTIMP"),
            ResponseCode::Refused => f.write_str("REFUSED"),
            ResponseCode::Unknown(code) => write!(f, "RCODE{}", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub name: DomainName,
    pub class: DnsClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl DnsAnswer {
    pub fn new(name: impl Into<DomainName>, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            class: DnsClass::IN,
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}

impl From<ZoneRecord> for DnsAnswer {
    fn from(record: ZoneRecord) -> Self {
        Self::new(record.key.name, record.value.ttl, record.value.data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub id: u16,
    pub questions: Vec<DnsQuestion>,
    pub authoritative: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub response_code: ResponseCode,
    pub answers: Vec<DnsAnswer>,
}

impl DnsResponse {
    /// An empty authoritative `NOERROR` reply to `query`.
    pub fn authoritative_for(query: &DnsQuery) -> Self {
        Self {
            id: query.id,
            questions: query.questions.clone(),
            authoritative: true,
            recursion_desired: query.recursion_desired,
            recursion_available: true,
            response_code: ResponseCode::NoError,
            answers: Vec::new(),
        }
    }

    /// A bare error reply that only echoes the id.
    pub fn error(id: u16, response_code: ResponseCode) -> Self {
        Self {
            id,
            questions: Vec::new(),
            authoritative: false,
            recursion_desired: false,
            recursion_available: true,
            response_code,
            answers: Vec::new(),
        }
    }
}
