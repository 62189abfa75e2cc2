/*!
 * Integration tests for building and delivering ERN 4.3 messages
 */

use anyhow::Result;

use ddex_ern::app_config::{MessageConfig, MessageControlType};
use ddex_ern::ern43::{self, Builder, NewReleaseMessage};
use ddex_ern::file_utils::FileManager;
use crate::common;

fn audio_album_delivery(config: MessageConfig) -> Builder {
    let mut builder = Builder::with_config(config);
    builder
        .set_header("MSG-43", "THR-43", "PADPIDA0000000001X", "Test Label")
        .add_recipient("PADPIDA0000000009X", "Store")
        .add_party("P1", "The Band", "Band, The")
        .add_party_with_isni("P2", "Jane Doe", "0000000121032683")
        .add_party_with_dpid("PL1", "Test Label", "PADPIDA0000000001X");

    for (number, reference) in ["S1", "S2"].iter().enumerate() {
        builder
            .add_sound_recording(reference, "MusicalWorkSoundRecording")
            .with_title(&format!("Track {}", number + 1), "")
            .with_artist("P1", "MainArtist", 1)
            .with_contributor("P2", &["Composer"], 1)
            .with_rights_controller("PL1", 100.0, &[])
            .with_duration_seconds(180 + number as u64)
            .done();
    }
    builder
        .add_image("IMG1", "FrontCoverImage")
        .with_title("Cover")
        .with_technical_details("T1", "cover.jpg")
        .done();

    builder
        .add_release("R1", "Album")
        .with_ean("4006381333931")
        .with_title("The Album", "")
        .with_artist("P1", "MainArtist", 1)
        .with_label("PL1", "")
        .with_genre("Rock", "")
        .with_pline(2024, "Test Label")
        .add_resource_group("", 1)
        .add_content_item(1, "S1")
        .add_content_item(2, "S2")
        .add_linked_resource("FrontCoverImage", "IMG1")
        .done()
        .done();

    builder
        .add_deal("R1")
        .with_commercial_model("PayAsYouGoModel")
        .with_use_type("PermanentDownload")
        .with_territories(&["US", "CA"]);
    builder
        .add_deal("R1")
        .with_commercial_model("SubscriptionModel")
        .with_use_type("OnDemandStream")
        .with_territory("Worldwide");

    builder
}

#[test]
fn test_ern43_workflow_withFullDelivery_shouldWriteValidDocument() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("album.xml");

    let builder = audio_album_delivery(MessageConfig::default());
    builder.validate()?;
    builder.write_file(&path)?;

    let (root, namespace) = common::read_root(&path)?;
    assert_eq!(root, ern43::ROOT_ELEMENT);
    assert_eq!(namespace, ern43::ERN_NAMESPACE);
    common::assert_well_formed(&FileManager::read_to_string(&path)?)?;
    Ok(())
}

#[test]
fn test_ern43_workflow_writtenFile_shouldDecodeBack() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("album.xml");
    let config = MessageConfig {
        message_control_type: Some(MessageControlType::LiveMessage),
        avs_version_id: Some("4".to_string()),
        ..Default::default()
    };
    audio_album_delivery(config).write_file(&path)?;

    let decoded = NewReleaseMessage::from_xml(&std::fs::read(&path)?)?;

    assert_eq!(decoded.party_list.party.len(), 3);
    assert_eq!(decoded.resource_list.sound_recording.len(), 2);
    assert_eq!(decoded.resource_list.sound_recording[1].duration.as_deref(), Some("PT3M1S"));
    let header = decoded.message_header.as_ref().unwrap();
    assert_eq!(header.message_control_type, Some(MessageControlType::LiveMessage));
    assert!(header.message_created_date_time.is_some());
    let group = &decoded.release_list.release[0].resource_group[0];
    assert_eq!(group.resource_group_content_item.len(), 2);
    assert!(decoded.validate().is_ok());
    Ok(())
}

#[test]
fn test_ern43_workflow_withDpidRecipients_shouldRenderPlainPartyIds() -> Result<()> {
    let builder = audio_album_delivery(MessageConfig::default());
    let xml = builder.to_xml_with_declaration()?;

    assert!(xml.contains("<PartyId>PADPIDA0000000009X</PartyId>"));
    assert!(xml.contains("<FullNameIndexed>Band, The</FullNameIndexed>"));
    assert!(xml.contains("<ISNI>0000000121032683</ISNI>"));
    assert!(xml.contains("<RightsControllerPartyReference>PL1</RightsControllerPartyReference>"));
    Ok(())
}
