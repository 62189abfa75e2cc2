/*!
 * Tests for post-construction validation of both schema generations
 */

use ddex_ern::errors::{DdexError, ValidationError};
use ddex_ern::ern38;
use ddex_ern::ern43;
use crate::common;

fn ern38_with_header() -> ern38::Builder {
    let mut builder = ern38::Builder::new();
    builder
        .set_header("M", "T", "PADPIDA0000000001X", "Label")
        .add_youtube_recipient();
    builder
}

#[test]
fn test_validate_withMinimalMessages_shouldPass() {
    assert!(common::minimal_ern38().validate().is_ok());
    assert!(common::minimal_ern43().validate().is_ok());
}

#[test]
fn test_validate_withoutHeader_shouldFailFirst() {
    let builder = ern38::Builder::new();
    assert_eq!(builder.build().validate(), Err(ValidationError::MissingHeader));
}

#[test]
fn test_validate_withHeaderGaps_shouldNameMissingPart() {
    let mut builder = ern38::Builder::new();
    builder.add_youtube_recipient();
    assert_eq!(builder.build().validate(), Err(ValidationError::MissingMessageId));

    let mut builder = ern38::Builder::new();
    builder.set_header("M", "", "PADPIDA0000000001X", "Label");
    assert_eq!(builder.build().validate(), Err(ValidationError::MissingThreadId));

    let mut builder = ern38::Builder::new();
    builder.set_header("M", "T", "PADPIDA0000000001X", "Label");
    assert_eq!(builder.build().validate(), Err(ValidationError::MissingRecipient));
}

#[test]
fn test_validate_withoutReleases_shouldFail() {
    let builder = ern38_with_header();
    assert_eq!(builder.build().validate(), Err(ValidationError::NoReleases));
}

#[test]
fn test_validate_withReleaseButNoDeals_shouldNameRelease() {
    let mut builder = ern38_with_header();
    builder.add_release("R1", "VideoSingle").done();

    assert_eq!(builder.build().validate(), Err(ValidationError::NoDeals("R1".to_string())));

    builder.add_release_deal("R1").add_deal().with_territory("Worldwide").done().done();
    assert_eq!(builder.build().validate(), Ok(()));
}

#[test]
fn test_validate_withEmptyReleaseDeal_shouldStillReportNoDeals() {
    let mut builder = ern38_with_header();
    builder.add_release("R1", "").done();
    builder.add_release_deal("R1").done();

    assert_eq!(builder.build().validate(), Err(ValidationError::NoDeals("R1".to_string())));
}

#[test]
fn test_validate_withUncoveredRelease_shouldNameIt() {
    let mut builder = ern38_with_header();
    builder.add_release("R1", "").done().add_release("R2", "").done();
    builder.add_release_deal("R1").add_deal().done().done();

    assert_eq!(
        builder.build().validate(),
        Err(ValidationError::NoDealForRelease("R2".to_string()))
    );
}

#[test]
fn test_validate_withDealForUnknownRelease_shouldFail() {
    let mut builder = ern38_with_header();
    builder.add_release("R1", "").done();
    builder.add_release_deal("R1").add_deal().done().done();
    builder.add_release_deal("R9").add_deal().done().done();

    assert_eq!(builder.build().validate(), Err(ValidationError::UnknownRelease("R9".to_string())));
}

#[test]
fn test_validate_withDanglingLinkedResource_shouldFail() {
    let mut builder = common::minimal_ern38();
    builder
        .add_release("R2", "")
        .add_resource_group("", 1)
        .add_content_item(1, "A1")
        .add_linked_resource("VideoScreenCapture", "IMG9")
        .done()
        .done();
    builder.add_release_deal("R2").add_deal().done().done();

    assert_eq!(
        builder.build().validate(),
        Err(ValidationError::UnknownResource {
            release: "R2".to_string(),
            resource: "IMG9".to_string(),
        })
    );
}

#[test]
fn test_validate_withEmptyTerritoryCodes_shouldFail() {
    let mut builder = common::minimal_ern38();
    builder.add_video("A2", "").with_territory(&[]).with_genre("Pop", "").done();

    match builder.build().validate() {
        Err(ValidationError::InvalidTerritoryScope { owner, .. }) => assert_eq!(owner, "A2"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_validate_ern43_withUnknownArtistParty_shouldFail() {
    let mut builder = common::minimal_ern43();
    builder.add_video("A2", "").with_artist("P9", "MainArtist", 1).done();

    assert_eq!(
        builder.build().validate(),
        Err(ValidationError::UnknownParty {
            owner: "A2".to_string(),
            party: "P9".to_string(),
        })
    );
}

#[test]
fn test_validate_ern43_withUnknownLabelParty_shouldNameRelease() {
    let mut builder = common::minimal_ern43();
    builder.add_release("R2", "").with_label("PL9", "").done();
    builder.add_deal("R2").with_territory("Worldwide");

    match builder.build().validate() {
        Err(ValidationError::UnknownParty { owner, party }) => {
            assert_eq!(owner, "R2");
            assert_eq!(party, "PL9");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_validate_ern43_withRegisteredController_shouldPass() {
    let mut builder = common::minimal_ern43();
    builder
        .add_party_with_dpid("PL1", "Label", "PADPIDA0000000001X")
        .add_sound_recording("S1", "")
        .with_rights_controller("PL1", 100.0, &["US"])
        .with_contributor("P1", &["Producer"], 1)
        .done();

    assert!(builder.build().validate().is_ok());
}

#[test]
fn test_builderValidate_shouldWrapInDdexError() {
    let builder = ern43::Builder::new();
    match builder.validate() {
        Err(DdexError::Validation(ValidationError::MissingHeader)) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}
