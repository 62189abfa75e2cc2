/*!
 * Identifier, duration and date helpers for DDEX messages.
 *
 * The predicates here are independent of the message tree: they check the
 * textual shape (and, for UPC/EAN, the check digit) of industry codes
 * before they are placed into releases and resources.
 */

use anyhow::{Result, anyhow};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use rand::RngCore;
use regex::Regex;

// @const: ISRC after normalization (CC XXX YY NNNNN)
static ISRC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}[A-Z0-9]{3}\d{7}$").unwrap()
});

// @const: ISWC after normalization (T + 9 digits + check digit)
static ISWC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^T\d{10}$").unwrap()
});

// @const: DDEX party id charset
static DPID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z0-9]+$").unwrap()
});

/// DPID of YouTube as a message recipient
pub const YOUTUBE_DPID: &str = "PADPIDA2013020802I";
pub const YOUTUBE_NAME: &str = "YouTube";

/// DPID of the YouTube Content ID matching system
pub const YOUTUBE_CONTENT_ID_DPID: &str = "PADPIDA2015120100H";
pub const YOUTUBE_CONTENT_ID_NAME: &str = "YouTube_ContentID";

/// Weighted mod-10 check over a fixed-length digit string.
///
/// `odd_weight` applies to the first, third, ... digit counted from the left
/// and `even_weight` to the others; the last digit is the check digit.
fn has_valid_check_digit(code: &str, len: usize, odd_weight: u32, even_weight: u32) -> bool {
    if code.len() != len || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = code.bytes().map(|b| u32::from(b - b'0')).collect();
    let sum: u32 = digits[..len - 1]
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * odd_weight } else { d * even_weight })
        .sum();

    (10 - sum % 10) % 10 == digits[len - 1]
}

/// Validate a 12-digit UPC-A code including its check digit
pub fn validate_upc(upc: &str) -> bool {
    has_valid_check_digit(upc, 12, 3, 1)
}

/// Validate a 13-digit EAN-13 code including its check digit
pub fn validate_ean(ean: &str) -> bool {
    has_valid_check_digit(ean, 13, 1, 3)
}

/// Validate an ISRC; hyphens are ignored and letters are upper-cased first
pub fn validate_isrc(isrc: &str) -> bool {
    let clean = isrc.to_uppercase().replace('-', "");
    clean.len() == 12 && ISRC_REGEX.is_match(&clean)
}

/// Validate an ISWC shape ("T-123.456.789-0"); the check digit is not verified
pub fn validate_iswc(iswc: &str) -> bool {
    let clean = iswc.replace(['.', '-'], "");
    clean.len() == 11 && ISWC_REGEX.is_match(&clean)
}

/// Validate a DDEX Party ID: 10 to 20 upper-case alphanumerics
pub fn validate_dpid(dpid: &str) -> bool {
    (10..=20).contains(&dpid.len()) && DPID_REGEX.is_match(dpid)
}

/// Format seconds as an ISO 8601 duration ("PT3M10S")
pub fn format_duration(seconds: u64) -> String {
    if seconds == 0 {
        return "PT0S".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut duration = String::from("PT");
    if hours > 0 {
        duration.push_str(&format!("{}H", hours));
    }
    if minutes > 0 {
        duration.push_str(&format!("{}M", minutes));
    }
    if secs > 0 {
        duration.push_str(&format!("{}S", secs));
    }

    duration
}

/// Parse the "PT#H#M#S" subset of ISO 8601 durations into seconds
pub fn parse_duration(duration: &str) -> Result<u64> {
    let body = duration
        .strip_prefix("PT")
        .ok_or_else(|| anyhow!("Invalid duration format: {}", duration))?;

    if body.is_empty() {
        return Err(anyhow!("Invalid duration format: {}", duration));
    }

    let mut total: u64 = 0;
    let mut number = String::new();
    let mut last_unit = 0;

    for ch in body.chars() {
        if ch.is_ascii_digit() {
            number.push(ch);
            continue;
        }

        // Units must appear in H, M, S order, each at most once
        let (rank, factor) = match ch {
            'H' => (1, 3600),
            'M' => (2, 60),
            'S' => (3, 1),
            _ => return Err(anyhow!("Invalid duration unit '{}' in: {}", ch, duration)),
        };
        if rank <= last_unit || number.is_empty() {
            return Err(anyhow!("Invalid duration format: {}", duration));
        }

        let value: u64 = number
            .parse()
            .map_err(|_| anyhow!("Invalid duration number in: {}", duration))?;
        total = value
            .checked_mul(factor)
            .and_then(|seconds| total.checked_add(seconds))
            .ok_or_else(|| anyhow!("Duration out of range: {}", duration))?;
        number.clear();
        last_unit = rank;
    }

    if !number.is_empty() {
        return Err(anyhow!("Duration has a trailing number without unit: {}", duration));
    }

    Ok(total)
}

/// Format a date as "YYYY-MM-DD"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date-time as "YYYY-MM-DDTHH:MM:SS" (no offset)
pub fn format_date_time<Tz: TimeZone>(date_time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date_time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn random_hex(bytes: usize) -> String {
    let mut buffer = vec![0u8; bytes];
    rand::rng().fill_bytes(&mut buffer);
    buffer.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Generate a message id: `<prefix>_<YYYYMMDDHHMMSS>_<8 hex>` (prefix defaults to "MSG")
pub fn generate_message_id(prefix: &str) -> String {
    let prefix = if prefix.is_empty() { "MSG" } else { prefix };
    format!("{}_{}_{}", prefix, Local::now().format("%Y%m%d%H%M%S"), random_hex(4))
}

/// Generate a thread id: `<prefix>_<YYYYMMDD>_<12 hex>` (prefix defaults to "THR")
pub fn generate_thread_id(prefix: &str) -> String {
    let prefix = if prefix.is_empty() { "THR" } else { prefix };
    format!("{}_{}_{}", prefix, Local::now().format("%Y%m%d"), random_hex(6))
}

/// Generate a resource/release/deal reference: `<prefix>_<16 hex>` (prefix defaults to "REF")
pub fn generate_reference(prefix: &str) -> String {
    let prefix = if prefix.is_empty() { "REF" } else { prefix };
    format!("{}_{}", prefix, random_hex(8))
}
