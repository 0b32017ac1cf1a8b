use orbital_dns_domain::{
    DnsAnswer, DnsQuery, DnsQuestion, DnsResponse, RecordData, RecordType, RecordValue,
    ResponseCode,
};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn aaaa_value(ip: &str, ttl: u32) -> RecordValue {
    RecordValue::new(RecordData::Aaaa(ip.parse::<Ipv6Addr>().unwrap()), ttl)
}

pub fn aaaa_answer(name: &str, ip: &str, ttl: u32) -> DnsAnswer {
    DnsAnswer::new(name, ttl, RecordData::Aaaa(ip.parse::<Ipv6Addr>().unwrap()))
}

pub fn a_answer(name: &str, ip: &str, ttl: u32) -> DnsAnswer {
    DnsAnswer::new(name, ttl, RecordData::A(ip.parse::<Ipv4Addr>().unwrap()))
}

pub struct DnsQueryBuilder {
    id: u16,
    questions: Vec<DnsQuestion>,
}

impl DnsQueryBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            questions: Vec::new(),
        }
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions.push(DnsQuestion::new(name, record_type));
        self
    }

    pub fn build(self) -> DnsQuery {
        DnsQuery::new(self.id, self.questions)
    }
}

pub fn upstream_reply(answers: Vec<DnsAnswer>) -> DnsResponse {
    DnsResponse {
        id: 0,
        questions: Vec::new(),
        authoritative: false,
        recursion_desired: true,
        recursion_available: true,
        response_code: ResponseCode::NoError,
        answers,
    }
}
