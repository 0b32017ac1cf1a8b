//! DNS wire format (RFC 1035) encoding and decoding on top of `hickory-proto`.
//!
//! The listeners and the forwarder all speak the domain `DnsQuery` /
//! `DnsResponse` types; this module is the only place that knows about
//! hickory's `Message`.

mod record_type_map;

pub use record_type_map::{
    class_from_hickory, class_to_hickory, rcode_from_hickory, rcode_to_hickory,
    record_type_from_hickory, record_type_to_hickory,
};

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, NULL};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use orbital_dns_domain::{
    DnsAnswer, DnsQuery, DnsQuestion, DnsResponse, DomainError, DomainName, RecordData,
    ResponseCode,
};
use tracing::debug;

/// Length of the fixed DNS header.
pub const HEADER_LEN: usize = 12;

const QR_BIT: u8 = 0x80;

pub struct WireCodec;

impl WireCodec {
    /// Decodes a client query.
    pub fn decode_query(bytes: &[u8]) -> Result<DnsQuery, DomainError> {
        let message = Message::from_vec(bytes)
            .map_err(|e| DomainError::InvalidDnsMessage(e.to_string()))?;

        if message.message_type() != MessageType::Query {
            return Err(DomainError::InvalidDnsMessage(
                "expected a query, got a response".to_string(),
            ));
        }

        let questions = message.queries().iter().map(question_from_hickory).collect();

        Ok(DnsQuery {
            id: message.id(),
            recursion_desired: message.recursion_desired(),
            questions,
        })
    }

    /// Encodes a query for an upstream, keeping its id and questions.
    pub fn encode_query(query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new();
        message
            .set_id(query.id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(query.recursion_desired);

        for question in &query.questions {
            message.add_query(question_to_hickory(question)?);
        }

        message
            .to_vec()
            .map_err(|e| DomainError::InvalidDnsMessage(format!("Failed to serialize query: {}", e)))
    }

    pub fn encode_response(response: &DnsResponse) -> Result<Vec<u8>, DomainError> {
        let mut message = Message::new();
        message
            .set_id(response.id)
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_authoritative(response.authoritative)
            .set_recursion_desired(response.recursion_desired)
            .set_recursion_available(response.recursion_available)
            .set_response_code(rcode_to_hickory(response.response_code));

        for question in &response.questions {
            message.add_query(question_to_hickory(question)?);
        }
        for answer in &response.answers {
            message.add_answer(answer_to_record(answer)?);
        }

        message.to_vec().map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize response: {}", e))
        })
    }

    /// Decodes an upstream reply. Only the answer section is kept.
    pub fn decode_response(bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(bytes)
            .map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "expected a response, got a query".to_string(),
            ));
        }

        let answers = message
            .answers()
            .iter()
            .map(answer_from_record)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            id = message.id(),
            rcode = ?message.response_code(),
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            questions: message.queries().iter().map(question_from_hickory).collect(),
            authoritative: message.authoritative(),
            recursion_desired: message.recursion_desired(),
            recursion_available: message.recursion_available(),
            response_code: rcode_from_hickory(message.response_code()),
            answers,
        })
    }

    /// Builds a `FORMERR` reply for bytes that failed to decode.
    ///
    /// Returns `None` when not even the header is readable, since there is
    /// no id to answer to. Datagrams with the QR bit set never get a reply.
    pub fn format_error_reply(bytes: &[u8]) -> Option<Vec<u8>> {
        if bytes.len() < HEADER_LEN || bytes[2] & QR_BIT != 0 {
            return None;
        }

        let id = u16::from_be_bytes([bytes[0], bytes[1]]);
        let mut response = DnsResponse::error(id, ResponseCode::FormErr);
        response.recursion_desired = bytes[2] & 0x01 != 0;

        Self::encode_response(&response).ok()
    }
}

fn parse_name(name: &DomainName) -> Result<Name, DomainError> {
    Name::from_ascii(name.presentation())
        .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", name, e)))
}

fn question_from_hickory(query: &Query) -> DnsQuestion {
    DnsQuestion::new(
        query.name().to_ascii(),
        record_type_from_hickory(query.query_type()),
    )
    .with_class(class_from_hickory(query.query_class()))
}

fn question_to_hickory(question: &DnsQuestion) -> Result<Query, DomainError> {
    let mut query = Query::query(
        parse_name(&question.name)?,
        record_type_to_hickory(question.record_type),
    );
    query.set_query_class(class_to_hickory(question.class));
    Ok(query)
}

fn answer_to_record(answer: &DnsAnswer) -> Result<Record, DomainError> {
    let rdata = match &answer.data {
        RecordData::A(addr) => RData::A(A(*addr)),
        RecordData::Aaaa(addr) => RData::AAAA(AAAA(*addr)),
        RecordData::Cname(target) => RData::CNAME(CNAME(parse_name(target)?)),
        RecordData::Opaque { record_type, rdata } => RData::Unknown {
            code: record_type_to_hickory(*record_type),
            rdata: if rdata.is_empty() {
                NULL::new()
            } else {
                NULL::with(rdata.clone())
            },
        },
    };

    let mut record = Record::from_rdata(parse_name(&answer.name)?, answer.ttl, rdata);
    record.set_dns_class(class_to_hickory(answer.class));
    Ok(record)
}

fn answer_from_record(record: &Record) -> Result<DnsAnswer, DomainError> {
    let data = match record.data() {
        RData::A(a) => RecordData::A(a.0),
        RData::AAAA(aaaa) => RecordData::Aaaa(aaaa.0),
        RData::CNAME(cname) => RecordData::Cname(DomainName::new(&cname.0.to_ascii())),
        other => RecordData::Opaque {
            record_type: record_type_from_hickory(record.record_type()),
            rdata: rdata_bytes(other)?,
        },
    };

    Ok(DnsAnswer {
        name: DomainName::new(&record.name().to_ascii()),
        class: class_from_hickory(record.dns_class()),
        ttl: record.ttl(),
        data,
    })
}

/// Raw RDATA with names written out in full, so the bytes stay valid when
/// they are later copied into a different message.
fn rdata_bytes(rdata: &RData) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::new();
    let mut encoder = BinEncoder::new(&mut buf);
    encoder.set_canonical_names(true);
    rdata
        .emit(&mut encoder)
        .map_err(|e| DomainError::InvalidDnsResponse(format!("Unreadable record data: {}", e)))?;
    Ok(buf)
}
