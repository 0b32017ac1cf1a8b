use serde::Deserialize;

/// Body of `POST /zones`. Both fields are optional here so a missing one
/// can be reported with its own message.
#[derive(Debug, Deserialize)]
pub struct AddZoneRecordRequest {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub ipv6: Option<String>,
}

impl AddZoneRecordRequest {
    /// Both fields, trimmed, or `None` if either is absent or blank.
    pub fn fields(&self) -> Option<(&str, &str)> {
        let domain = self.domain.as_deref().map(str::trim).unwrap_or_default();
        let ipv6 = self.ipv6.as_deref().map(str::trim).unwrap_or_default();
        if domain.is_empty() || ipv6.is_empty() {
            return None;
        }
        Some((domain, ipv6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_trims() {
        let req: AddZoneRecordRequest =
            serde_json::from_str(r#"{"domain":" app.orbital ","ipv6":"2001:db8::1"}"#).unwrap();
        assert_eq!(req.fields(), Some(("app.orbital", "2001:db8::1")));
    }

    #[test]
    fn test_fields_missing_or_blank() {
        let req: AddZoneRecordRequest = serde_json::from_str(r#"{"domain":"app.orbital"}"#).unwrap();
        assert_eq!(req.fields(), None);

        let req: AddZoneRecordRequest =
            serde_json::from_str(r#"{"domain":"","ipv6":"2001:db8::1"}"#).unwrap();
        assert_eq!(req.fields(), None);
    }
}
