/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;

use ddex_ern::errors::{DdexError, ValidationError};

#[test]
fn test_validationError_noDeals_shouldNameRelease() {
    let error = ValidationError::NoDeals("R1".to_string());
    let display = format!("{}", error);
    assert!(display.contains("at least one Deal is required"));
    assert!(display.contains("R1"));
}

#[test]
fn test_validationError_unknownResource_shouldDisplayBothReferences() {
    let error = ValidationError::UnknownResource {
        release: "R1".to_string(),
        resource: "A9".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("R1"));
    assert!(display.contains("A9"));
}

#[test]
fn test_validationError_unknownParty_shouldDisplayOwner() {
    let error = ValidationError::UnknownParty {
        owner: "A1".to_string(),
        party: "P9".to_string(),
    };
    assert_eq!(format!("{}", error), "A1 references unknown party: P9");
}

#[test]
fn test_ddexError_fromValidation_shouldWrap() {
    let error: DdexError = ValidationError::MissingHeader.into();
    assert!(matches!(error, DdexError::Validation(ValidationError::MissingHeader)));
    assert_eq!(format!("{}", error), "Validation error: MessageHeader is required");
}

#[test]
fn test_ddexError_write_shouldDisplayPathAndSource() {
    let error = DdexError::Write {
        path: PathBuf::from("/tmp/out.xml"),
        source: anyhow::anyhow!("disk full"),
    };
    let display = format!("{}", error);
    assert!(display.starts_with("failed to write file"));
    assert!(display.contains("out.xml"));
    assert!(display.contains("disk full"));
}

#[test]
fn test_ddexError_fromAnyhow_shouldBecomeConfig() {
    let error: DdexError = anyhow::anyhow!("bad language").into();
    match error {
        DdexError::Config(message) => assert_eq!(message, "bad language"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_ddexError_fromUtf8_shouldReadAsUnmarshal() {
    let bytes = [0xffu8, 0xfe];
    let error: DdexError = std::str::from_utf8(&bytes).unwrap_err().into();
    assert!(format!("{}", error).starts_with("failed to unmarshal XML"));
}
