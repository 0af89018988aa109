//! Zone-file (presentation format) rendering of RDATA.
//!
//! Most record kinds already render correctly through their `Display`
//! implementation. The kinds handled here do not: character-strings must be
//! quoted and escaped (RFC 1035 §5.1), RDATA of unknown kinds uses the generic
//! `\# <length> <hex>` form (RFC 3597 §5), and DNSSEC algorithms and type
//! bitmaps are written numerically and by mnemonic respectively.

use std::fmt::{self, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hickory_resolver::proto::rr::dnssec::rdata::{DNSSECRData, NSEC, SIG};
use hickory_resolver::proto::rr::rdata::caa::Value;
use hickory_resolver::proto::rr::rdata::{CAA, NAPTR, TXT};
use hickory_resolver::proto::rr::RData;
use hickory_resolver::proto::serialize::binary::BinEncodable;

use crate::dns::records::type_mnemonic;

/// Renders `rdata` the way it would appear in a zone file.
pub fn rdata_presentation(rdata: &RData) -> String {
    match rdata {
        RData::TXT(txt) => txt_text(txt),
        RData::HINFO(hinfo) => format!(
            "{} {}",
            character_string(hinfo.cpu()),
            character_string(hinfo.os())
        ),
        RData::NAPTR(naptr) => naptr_text(naptr),
        RData::CAA(caa) => caa_text(caa),
        RData::NULL(null) => generic(null.anything()),
        RData::Unknown { rdata, .. } => generic(rdata.anything()),
        RData::DNSSEC(dnssec) => dnssec_text(dnssec),
        other => displayed(other).unwrap_or_else(|| encoded(other)),
    }
}

/// Quotes one character-string, escaping `"` and `\` and writing bytes
/// outside printable ASCII as `\DDD`.
fn character_string(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len() + 2);
    text.push('"');
    for &byte in bytes {
        match byte {
            b'"' | b'\\' => {
                text.push('\\');
                text.push(char::from(byte));
            }
            0x20..=0x7e => text.push(char::from(byte)),
            _ => {
                let _ = write!(text, "\\{byte:03}");
            }
        }
    }
    text.push('"');
    text
}

/// RFC 3597 generic RDATA: `\# <length> <hex>`.
fn generic(bytes: &[u8]) -> String {
    let mut text = format!("\\# {}", bytes.len());
    if !bytes.is_empty() {
        text.push(' ');
        for byte in bytes {
            let _ = write!(text, "{byte:02x}");
        }
    }
    text
}

fn txt_text(txt: &TXT) -> String {
    txt.txt_data()
        .iter()
        .map(|part| character_string(part))
        .collect::<Vec<_>>()
        .join(" ")
}

fn naptr_text(naptr: &NAPTR) -> String {
    format!(
        "{} {} {} {} {} {}",
        naptr.order(),
        naptr.preference(),
        character_string(naptr.flags()),
        character_string(naptr.services()),
        character_string(naptr.regexp()),
        naptr.replacement()
    )
}

fn caa_text(caa: &CAA) -> String {
    let flags = if caa.issuer_critical() { 128 } else { 0 };
    let value = match caa.value() {
        Value::Unknown(bytes) => character_string(bytes),
        value => displayed(value).unwrap_or_else(|| "\"\"".to_string()),
    };
    format!("{flags} {} {value}", caa.tag())
}

fn dnssec_text(rdata: &DNSSECRData) -> String {
    match rdata {
        DNSSECRData::NSEC(nsec) => nsec_text(nsec),
        DNSSECRData::RRSIG(rrsig) => sig_text(rrsig),
        DNSSECRData::SIG(sig) => sig_text(sig),
        DNSSECRData::Unknown { rdata, .. } => generic(rdata.anything()),
        other => displayed(other).unwrap_or_default(),
    }
}

fn nsec_text(nsec: &NSEC) -> String {
    let mut text = nsec.next_domain_name().to_ascii();
    for record_type in nsec.type_bit_maps() {
        text.push(' ');
        text.push_str(&type_mnemonic(u16::from(*record_type)));
    }
    text
}

fn sig_text(sig: &SIG) -> String {
    format!(
        "{} {} {} {} {} {} {} {} {}",
        type_mnemonic(u16::from(sig.type_covered())),
        u8::from(sig.algorithm()),
        sig.num_labels(),
        sig.original_ttl(),
        sig.sig_expiration(),
        sig.sig_inception(),
        sig.key_tag(),
        sig.signer_name(),
        BASE64.encode(sig.sig())
    )
}

/// `Display` output, or `None` where the implementation refuses to render
/// (OPT, CAA values that are not UTF-8).
fn displayed<D: fmt::Display + ?Sized>(value: &D) -> Option<String> {
    let mut text = String::new();
    write!(text, "{value}").ok()?;
    Some(text)
}

fn encoded(rdata: &RData) -> String {
    match BinEncodable::to_bytes(rdata) {
        Ok(bytes) => generic(&bytes),
        Err(e) => {
            log::debug!("Failed to encode {} RDATA: {e}", rdata.record_type());
            String::new()
        }
    }
}
