//! Record normalization.
//!
//! Every resource record, whatever its kind, is flattened into
//! `{name, type, ttl, value}`. The value is the RDATA in zone-file
//! presentation format; kinds the parser does not know use the RFC 3597
//! generic `\# <length> <hex>` form.

use hickory_resolver::proto::rr::Record;

use crate::dns::presentation::rdata_presentation;
use crate::models::NormalizedRecord;

/// A resource record that can render itself into the normalized columns.
pub trait RenderRecord {
    /// Owner name in wire form, fully qualified (trailing dot kept).
    fn owner(&self) -> String;

    /// Numeric RR type code.
    fn type_code(&self) -> u16;

    /// Time to live in seconds.
    fn time_to_live(&self) -> u32;

    /// RDATA in presentation format, without owner, class, type or TTL columns.
    fn rdata_text(&self) -> String;
}

impl RenderRecord for Record {
    fn owner(&self) -> String {
        self.name().to_ascii()
    }

    fn type_code(&self) -> u16 {
        u16::from(self.record_type())
    }

    fn time_to_live(&self) -> u32 {
        self.ttl()
    }

    fn rdata_text(&self) -> String {
        // Records without RDATA only appear in dynamic updates
        self.data().map(rdata_presentation).unwrap_or_default()
    }
}

/// Converts a record into its normalized form. Never fails.
pub fn normalize<R: RenderRecord + ?Sized>(record: &R) -> NormalizedRecord {
    NormalizedRecord {
        name: record.owner(),
        record_type: type_mnemonic(record.type_code()),
        ttl: record.time_to_live(),
        value: clean_value(&record.rdata_text()),
    }
}

/// Maps an RR type code to its mnemonic, falling back to `TYPE<code>`
/// for codes without one.
pub fn type_mnemonic(code: u16) -> String {
    let mnemonic = match code {
        1 => "A",
        2 => "NS",
        3 => "MD",
        4 => "MF",
        5 => "CNAME",
        6 => "SOA",
        7 => "MB",
        8 => "MG",
        9 => "MR",
        10 => "NULL",
        11 => "WKS",
        12 => "PTR",
        13 => "HINFO",
        14 => "MINFO",
        15 => "MX",
        16 => "TXT",
        17 => "RP",
        18 => "AFSDB",
        19 => "X25",
        20 => "ISDN",
        21 => "RT",
        22 => "NSAP",
        23 => "NSAP-PTR",
        24 => "SIG",
        25 => "KEY",
        26 => "PX",
        27 => "GPOS",
        28 => "AAAA",
        29 => "LOC",
        30 => "NXT",
        31 => "EID",
        32 => "NIMLOC",
        33 => "SRV",
        34 => "ATMA",
        35 => "NAPTR",
        36 => "KX",
        37 => "CERT",
        38 => "A6",
        39 => "DNAME",
        40 => "SINK",
        41 => "OPT",
        42 => "APL",
        43 => "DS",
        44 => "SSHFP",
        45 => "IPSECKEY",
        46 => "RRSIG",
        47 => "NSEC",
        48 => "DNSKEY",
        49 => "DHCID",
        50 => "NSEC3",
        51 => "NSEC3PARAM",
        52 => "TLSA",
        53 => "SMIMEA",
        55 => "HIP",
        56 => "NINFO",
        57 => "RKEY",
        58 => "TALINK",
        59 => "CDS",
        60 => "CDNSKEY",
        61 => "OPENPGPKEY",
        62 => "CSYNC",
        63 => "ZONEMD",
        64 => "SVCB",
        65 => "HTTPS",
        99 => "SPF",
        100 => "UINFO",
        101 => "UID",
        102 => "GID",
        103 => "UNSPEC",
        104 => "NID",
        105 => "L32",
        106 => "L64",
        107 => "LP",
        108 => "EUI48",
        109 => "EUI64",
        249 => "TKEY",
        250 => "TSIG",
        251 => "IXFR",
        252 => "AXFR",
        253 => "MAILB",
        254 => "MAILA",
        255 => "ANY",
        256 => "URI",
        257 => "CAA",
        258 => "AVC",
        259 => "DOA",
        260 => "AMTRELAY",
        32768 => "TA",
        32769 => "DLV",
        _ => return format!("TYPE{code}"),
    };
    mnemonic.to_string()
}

/// Keeps values on a single CSV/log line: tabs become spaces and trailing
/// line breaks are dropped.
fn clean_value(text: &str) -> String {
    text.trim_end_matches(['\n', '\r']).replace('\t', " ")
}
