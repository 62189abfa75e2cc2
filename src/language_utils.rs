/*!
 * Language utilities for DDEX `LanguageAndScriptCode` values.
 *
 * DDEX carries BCP 47-like tags ("en", "en-US", "zh-Hant"). The primary
 * subtag must be an ISO 639-1 or ISO 639-2 code; further subtags are
 * only checked for shape.
 */

use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Language code type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
    /// ISO 639-2/B (3-letter) code
    Part2B,
}

// @const: Script/region subtag shape
static SUBTAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]{2,8}$").unwrap()
});

// ISO 639-2/B codes that differ from their 639-2/T counterpart
const PART2B_CODES: [(&str, &str); 18] = [
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Validate if a language code is a valid ISO 639-1 or ISO 639-2 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part1);
        }
    } else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part2T);
        }

        if PART2B_CODES.iter().any(|(b, _)| *b == normalized_code) {
            return Ok(LanguageCodeType::Part2B);
        }
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Validate a `LanguageAndScriptCode` such as "en" or "en-US"
pub fn validate_language_and_script_code(code: &str) -> Result<LanguageCodeType> {
    let mut subtags = code.trim().split(['-', '_']);
    let primary = subtags.next().unwrap_or_default();
    let code_type = validate_language_code(primary)?;

    for subtag in subtags {
        if !SUBTAG_REGEX.is_match(subtag) {
            return Err(anyhow!("Invalid subtag '{}' in language code: {}", subtag, code));
        }
    }

    Ok(code_type)
}

/// Get the English language name for the primary subtag of a code
pub fn get_language_name(code: &str) -> Result<String> {
    let primary = code.trim().split(['-', '_']).next().unwrap_or_default().to_lowercase();

    let lang = match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => {
            let part2t = PART2B_CODES
                .iter()
                .find(|(b, _)| *b == primary)
                .map(|(_, t)| *t)
                .unwrap_or(primary.as_str());
            Language::from_639_3(part2t)
        }
        _ => None,
    };

    lang.map(|l| l.to_name().to_string())
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))
}
