use crate::{DomainName, RecordType};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DnsClass {
    #[default]
    IN,
    CH,
    HS,
    ANY,
    Unknown(u16),
}

impl DnsClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::IN => 1,
            DnsClass::CH => 3,
            DnsClass::HS => 4,
            DnsClass::ANY => 255,
            DnsClass::Unknown(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => DnsClass::IN,
            3 => DnsClass::CH,
            4 => DnsClass::HS,
            255 => DnsClass::ANY,
            other => DnsClass::Unknown(other),
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsClass::IN => f.write_str("IN"),
            DnsClass::CH => f.write_str("CH"),
            DnsClass::HS => f.write_str("HS"),
            DnsClass::ANY => f.write_str("ANY"),
            DnsClass::Unknown(code) => write!(f, "CLASS{}", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuestion {
    pub name: DomainName,
    pub record_type: RecordType,
    pub class: DnsClass,
}

impl DnsQuestion {
    pub fn new(name: impl Into<DomainName>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: DnsClass::IN,
        }
    }

    pub fn with_class(mut self, class: DnsClass) -> Self {
        self.class = class;
        self
    }
}

/// A decoded query: the transaction id plus its questions, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub id: u16,
    pub recursion_desired: bool,
    pub questions: Vec<DnsQuestion>,
}

impl DnsQuery {
    pub fn new(id: u16, questions: Vec<DnsQuestion>) -> Self {
        Self {
            id,
            recursion_desired: true,
            questions,
        }
    }

    pub fn single(id: u16, name: impl Into<DomainName>, record_type: RecordType) -> Self {
        Self::new(id, vec![DnsQuestion::new(name, record_type)])
    }

    /// Same id and flags, different question set.
    pub fn with_questions(&self, questions: Vec<DnsQuestion>) -> Self {
        Self {
            id: self.id,
            recursion_desired: self.recursion_desired,
            questions,
        }
    }
}
