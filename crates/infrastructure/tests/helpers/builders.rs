use orbital_dns_domain::{DnsAnswer, DnsQuery, RecordData, RecordType, RecordValue};
use orbital_dns_infrastructure::dns::WireCodec;
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

pub fn aaaa_query(id: u16, name: &str) -> DnsQuery {
    DnsQuery::single(id, name, RecordType::AAAA)
}

pub fn aaaa_query_bytes(id: u16, name: &str) -> Vec<u8> {
    WireCodec::encode_query(&aaaa_query(id, name)).unwrap()
}
