//! Data types shared by the transfer pipeline and the exporters.

use serde::Serialize;

/// A resource record flattened into the four columns every record kind shares.
///
/// `value` holds the presentation-format RDATA only; it never contains a tab
/// or a trailing line break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    /// Owner name, fully qualified with its trailing dot
    pub name: String,
    /// Type mnemonic (`A`, `MX`, ... or `TYPE<code>`)
    #[serde(rename = "type")]
    pub record_type: String,
    /// Time to live in seconds
    pub ttl: u32,
    /// RDATA rendered in presentation format
    pub value: String,
}

/// Outcome of one zone transfer attempt against one nameserver.
///
/// Created with an empty record list before the transfer starts so a failed
/// attempt still produces a reportable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneTransferResult {
    /// Domain the transfer was requested for
    pub domain: String,
    /// Nameserver the transfer was requested from
    pub nameserver: String,
    /// Records disclosed by the transfer, in arrival order
    pub records: Vec<NormalizedRecord>,
}

impl ZoneTransferResult {
    /// Creates an empty result for a `(domain, nameserver)` pair.
    pub fn new(domain: impl Into<String>, nameserver: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            nameserver: nameserver.into(),
            records: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_has_no_records() {
        let result = ZoneTransferResult::new("example.com", "ns1.example.com");
        assert_eq!(result.domain, "example.com");
        assert_eq!(result.nameserver, "ns1.example.com");
        assert!(result.records.is_empty());
    }

    #[test]
    fn test_record_serializes_type_field_name() {
        let record = NormalizedRecord {
            name: "www.example.com.".to_string(),
            record_type: "A".to_string(),
            ttl: 300,
            value: "192.0.2.10".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "A");
        assert_eq!(json["ttl"], 300);
        assert!(json.get("record_type").is_none());
    }
}
