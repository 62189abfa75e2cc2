/*!
 * Integration tests for building and delivering ERN 3.8 messages
 */

use anyhow::Result;

use ddex_ern::errors::DdexError;
use ddex_ern::ern38::{self, Builder, NewReleaseMessage};
use ddex_ern::file_utils::FileManager;
use ddex_ern::identifiers::{generate_message_id, generate_thread_id};
use ddex_ern::xml::XML_DECLARATION;
use crate::common;

/// A YouTube music video delivery: video, thumbnail, audio, release and two deals
fn music_video_delivery() -> Builder {
    let mut builder = Builder::new();
    builder
        .set_header(
            &generate_message_id(""),
            &generate_thread_id(""),
            "PADPIDA0000000001X",
            "Test Label",
        )
        .add_youtube_recipient()
        .add_content_id_recipient();

    builder
        .add_video("A1", "ShortFormMusicalWorkVideo")
        .with_isrc("USRC17607839")
        .with_duration_seconds(214)
        .with_title("Summer Song", "")
        .with_display_artist_name("The Band", "")
        .with_artist("The Band", "MainArtist", 1)
        .with_contributor("Jane Doe", &["Director"], 1)
        .with_rights_controller("Test Label", 100.0, &[])
        .with_pline(2024, "Test Label")
        .with_genre("Pop", "")
        .with_parental_warning("NotExplicit")
        .with_technical_details("T1", "summer_song.mp4")
        .with_territory(&["US", "CA"])
        .with_title("Summer Song (North America)", "")
        .done()
        .add_image("IMG1", "VideoScreenCapture")
        .with_technical_details("T2", "summer_song.jpg")
        .done()
        .add_sound_recording("S1", "MusicalWorkSoundRecording")
        .with_isrc("USRC17607840")
        .with_title("Summer Song", "")
        .with_label("Test Label", "")
        .done();

    builder
        .add_release("R1", "VideoSingle")
        .with_upc("036000291452")
        .with_title("Summer Song", "")
        .with_display_artist_name("The Band", "")
        .with_label("Test Label", "")
        .with_release_date("2024-06-01")
        .add_release_resource_reference("A1")
        .add_resource_group("", 1)
        .add_content_item(1, "A1")
        .add_linked_resource("VideoScreenCapture", "IMG1")
        .done()
        .done();

    builder
        .add_release_deal("R1")
        .add_deal()
        .with_commercial_model("AdvertisementSupportedModel")
        .with_use_type("Stream")
        .with_territory("Worldwide")
        .with_validity_period("2024-06-01", None)
        .done()
        .add_deal()
        .with_commercial_model("RightsClaimModel")
        .with_use_type("UserMakeAvailableUserProvided")
        .with_rights_claim_policy("Monetize")
        .with_territory("Worldwide")
        .done()
        .done();

    builder
}

#[test]
fn test_ern38_workflow_withFullDelivery_shouldWriteValidDocument() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("delivery.xml");

    let builder = music_video_delivery();
    builder.validate()?;
    builder.write_file(&path)?;

    assert!(FileManager::file_exists(&path));
    let (root, namespace) = common::read_root(&path)?;
    assert_eq!(root, ern38::ROOT_ELEMENT);
    assert_eq!(namespace, ern38::ERN_NAMESPACE);

    let written = FileManager::read_to_string(&path)?;
    assert!(written.starts_with(XML_DECLARATION));
    let elements = common::assert_well_formed(&written)?;
    assert!(elements > 50);
    Ok(())
}

#[test]
fn test_ern38_workflow_writtenFile_shouldDecodeBack() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("delivery.xml");
    let builder = music_video_delivery();
    builder.write_file(&path)?;

    let bytes = std::fs::read(&path)?;
    let decoded = NewReleaseMessage::from_xml(&bytes)?;

    let video = &decoded.resource_list.video[0];
    assert_eq!(video.video_details_by_territory.len(), 2);
    assert_eq!(video.video_details_by_territory[1].territory_code, vec!["US", "CA"]);
    assert_eq!(decoded.release_ids(), vec!["036000291452"]);
    assert_eq!(decoded.deal_list.release_deal[0].deal.len(), 2);
    assert!(decoded.validate().is_ok());
    Ok(())
}

#[test]
fn test_ern38_workflow_withSerialize_shouldMatchWrittenBody() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("delivery.xml");
    let builder = music_video_delivery();

    builder.write_file(&path)?;
    let body = String::from_utf8(builder.serialize()?)?;
    let written = FileManager::read_to_string(&path)?;

    assert_eq!(written, format!("{}\n{}", XML_DECLARATION, body));
    Ok(())
}

#[test]
fn test_ern38_workflow_invalidMessage_shouldStillBeWritable() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("draft.xml");

    let mut builder = Builder::new();
    builder.add_video("A1", "").with_title("Draft", "").done();

    assert!(matches!(builder.validate(), Err(DdexError::Validation(_))));
    builder.write_file(&path)?;
    assert!(FileManager::file_exists(&path));
    Ok(())
}
