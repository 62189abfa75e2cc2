/*!
 * Tests for identifier predicates, durations and generated ids
 */

use chrono::{NaiveDate, TimeZone, Utc};

use ddex_ern::identifiers::{
    format_date, format_date_time, format_duration, generate_message_id, generate_reference,
    generate_thread_id, parse_duration, validate_dpid, validate_ean, validate_isrc, validate_iswc,
    validate_upc,
};

#[test]
fn test_validateUpc_withCorrectCheckDigit_shouldAccept() {
    assert!(validate_upc("036000291452"));
    assert!(!validate_upc("036000291453"));
}

#[test]
fn test_validateUpc_withWrongLength_shouldReject() {
    assert!(!validate_upc("03600029145"));
    assert!(!validate_upc("0360002914520"));
    assert!(!validate_upc(""));
}

#[test]
fn test_validateEan_withCorrectCheckDigit_shouldAccept() {
    assert!(validate_ean("4006381333931"));
    assert!(!validate_ean("4006381333932"));
    assert!(!validate_ean("036000291452"));
}

#[test]
fn test_validateIsrc_withHyphensAndCase_shouldNormalize() {
    assert!(validate_isrc("USRC17607839"));
    assert!(validate_isrc("US-RC1-76-07839"));
    assert!(validate_isrc("usrc17607839"));
    assert!(!validate_isrc("1SRC17607839"));
    assert!(!validate_isrc("USRC1760783"));
}

#[test]
fn test_validateIswc_withPunctuation_shouldAccept() {
    assert!(validate_iswc("T-034.524.680-1"));
    assert!(validate_iswc("T0345246801"));
    assert!(!validate_iswc("034.524.680-1"));
    assert!(!validate_iswc("T-034.524.680"));
}

#[test]
fn test_validateDpid_shouldCheckLengthAndCharset() {
    assert!(validate_dpid("PADPIDA2013020802I"));
    assert!(!validate_dpid("PADPID"));
    assert!(!validate_dpid("padpida2013020802i"));
    assert!(!validate_dpid("PADPIDA20130208021234567"));
}

#[test]
fn test_formatDuration_shouldUseIsoUnits() {
    assert_eq!(format_duration(0), "PT0S");
    assert_eq!(format_duration(190), "PT3M10S");
    assert_eq!(format_duration(3600), "PT1H");
    assert_eq!(format_duration(3725), "PT1H2M5S");
}

#[test]
fn test_parseDuration_shouldInvertFormat() {
    assert_eq!(parse_duration("PT3M10S").unwrap(), 190);
    assert_eq!(parse_duration("PT0S").unwrap(), 0);

    for seconds in (0..20_000).step_by(37) {
        assert_eq!(parse_duration(&format_duration(seconds)).unwrap(), seconds);
    }

    for seconds in [86_399, 86_400, 86_401, 90_061, u64::MAX / 3600 * 3600, u64::MAX] {
        assert_eq!(parse_duration(&format_duration(seconds)).unwrap(), seconds);
    }
}

#[test]
fn test_parseDuration_withOverflowingValue_shouldFail() {
    assert!(parse_duration("PT9999999999999999999H").is_err());
    assert!(parse_duration("PT5124095576030432H").is_err());
    assert!(parse_duration("PT5124095576030431H1M").is_err());
    assert_eq!(parse_duration("PT5124095576030431H15S").unwrap(), u64::MAX);
}

#[test]
fn test_parseDuration_withInvalidInput_shouldFail() {
    assert!(parse_duration("3M10S").is_err());
    assert!(parse_duration("PT").is_err());
    assert!(parse_duration("PT3X").is_err());
    assert!(parse_duration("PT10").is_err());
}

#[test]
fn test_formatDate_shouldUseIsoCalendarDate() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    assert_eq!(format_date(date), "2024-03-07");

    let date_time = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
    assert_eq!(format_date_time(&date_time), "2024-03-07T09:05:00");
}

#[test]
fn test_generateIds_shouldUsePrefixOrDefault() {
    assert!(generate_message_id("").starts_with("MSG_"));
    assert!(generate_message_id("LBL").starts_with("LBL_"));
    assert!(generate_thread_id("").starts_with("THR_"));

    let reference = generate_reference("");
    assert!(reference.starts_with("REF_"));
    assert_eq!(reference.len(), "REF_".len() + 16);
    assert_ne!(generate_reference("A"), generate_reference("A"));
}
