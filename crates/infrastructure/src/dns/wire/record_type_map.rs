//! Conversions between domain DNS enums and their `hickory_proto` twins.
//!
//! Everything goes through the numeric code so types and classes that either
//! side doesn't name still survive the trip.

use orbital_dns_domain::{DnsClass, RecordType, ResponseCode};
use hickory_proto::op::ResponseCode as HickoryResponseCode;
use hickory_proto::rr::{DNSClass, RecordType as HickoryRecordType};

pub fn record_type_to_hickory(record_type: RecordType) -> HickoryRecordType {
    HickoryRecordType::from(record_type.to_u16())
}

pub fn record_type_from_hickory(record_type: HickoryRecordType) -> RecordType {
    RecordType::from_u16(u16::from(record_type))
}

pub fn class_to_hickory(class: DnsClass) -> DNSClass {
    DNSClass::from(class.to_u16())
}

pub fn class_from_hickory(class: DNSClass) -> DnsClass {
    DnsClass::from_u16(u16::from(class))
}

pub fn rcode_to_hickory(rcode: ResponseCode) -> HickoryResponseCode {
    let code = rcode.to_u16();
    // High bits only travel in EDNS; the header keeps the low nibble.
    HickoryResponseCode::from((code >> 4) as u8, (code & 0x0F) as u8)
}

pub fn rcode_from_hickory(rcode: HickoryResponseCode) -> ResponseCode {
    ResponseCode::from_u16(u16::from(rcode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_map_to_hickory() {
        assert_eq!(record_type_to_hickory(RecordType::AAAA), HickoryRecordType::AAAA);
        assert_eq!(record_type_to_hickory(RecordType::A), HickoryRecordType::A);
        assert_eq!(record_type_from_hickory(HickoryRecordType::MX), RecordType::MX);
    }

    #[test]
    fn test_unnamed_type_keeps_its_code() {
        let hickory = record_type_to_hickory(RecordType::Unknown(65));
        assert_eq!(u16::from(hickory), 65);
        assert_eq!(record_type_from_hickory(hickory), RecordType::Unknown(65));
    }

    #[test]
    fn test_rcode_mapping() {
        assert_eq!(
            rcode_to_hickory(ResponseCode::FormErr),
            HickoryResponseCode::FormErr
        );
        assert_eq!(
            rcode_from_hickory(HickoryResponseCode::NXDomain),
            ResponseCode::NXDomain
        );
    }

    #[test]
    fn test_class_mapping() {
        assert_eq!(class_to_hickory(DnsClass::IN), DNSClass::IN);
        assert_eq!(class_from_hickory(DNSClass::CH), DnsClass::CH);
    }
}
