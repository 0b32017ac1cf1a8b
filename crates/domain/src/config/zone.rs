use serde::{Deserialize, Serialize};

/// Records loaded into the zone at startup.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ZoneConfig {
    #[serde(default)]
    pub records: Vec<SeedRecord>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SeedRecord {
    pub domain: String,
    pub ipv6: String,
}

impl SeedRecord {
    pub fn new(domain: impl Into<String>, ipv6: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ipv6: ipv6.into(),
        }
    }
}
