/*!
 * Tests for the ERN 3.8 builder
 */

use chrono::DateTime;

use ddex_ern::app_config::{MessageConfig, MessageControlType};
use ddex_ern::ern38::Builder;
use ddex_ern::identifiers::{YOUTUBE_CONTENT_ID_DPID, YOUTUBE_DPID};

#[test]
fn test_new_shouldStampVersionConstants() {
    let builder = Builder::new();
    let message = builder.build();

    assert_eq!(message.xmlns_ern, "http://ddex.net/xml/ern/382");
    assert_eq!(message.message_schema_version_id, "ern/382");
    assert_eq!(message.language_and_script_code, "en");
    assert!(message.message_header.is_none());
}

#[test]
fn test_withConfig_shouldApplyLanguageProfileAndControlType() {
    let config = MessageConfig {
        language_and_script_code: "fr".to_string(),
        message_control_type: Some(MessageControlType::LiveMessage),
        release_profile_version_id: None,
        ..Default::default()
    };
    let mut builder = Builder::with_config(config);
    builder.set_header("M", "T", "PADPIDA0000000001X", "Label");

    let message = builder.build();
    assert_eq!(message.language_and_script_code, "fr");
    assert_eq!(message.release_profile_version_id, None);
    let header = message.message_header.as_ref().unwrap();
    assert_eq!(header.message_control_type, Some(MessageControlType::LiveMessage));
    assert!(header.message_created_date_time.is_some());
}

#[test]
fn test_addRecipient_withoutHeader_shouldInitializeHeader() {
    let mut builder = Builder::new();
    builder.add_youtube_recipient().add_content_id_recipient();

    let header = builder.build().message_header.as_ref().unwrap();
    assert!(header.message_id.is_empty());
    assert_eq!(header.message_recipient.len(), 2);
    assert_eq!(header.message_recipient[0].party_id[0].value, YOUTUBE_DPID);
    assert_eq!(header.message_recipient[1].party_id[0].value, YOUTUBE_CONTENT_ID_DPID);
    assert_eq!(header.message_recipient[1].party_name[0].full_name, "YouTube_ContentID");
}

#[test]
fn test_setHeader_shouldReplacePreviousRecipients() {
    let mut builder = Builder::new();
    builder.add_youtube_recipient();
    builder.set_header("M", "T", "PADPIDA0000000001X", "Label");

    let header = builder.build().message_header.as_ref().unwrap();
    assert_eq!(header.message_id, "M");
    assert!(header.message_recipient.is_empty());
}

#[test]
fn test_headerSetters_shouldFillOptionalParts() {
    let stamp = DateTime::parse_from_rfc3339("2024-01-02T03:04:05+01:00").unwrap();
    let mut builder = Builder::new();
    builder
        .set_header("M", "T", "PADPIDA0000000001X", "Distributor")
        .set_sent_on_behalf_of("PADPIDA0000000002X", "Label")
        .set_comment("first delivery")
        .set_update_indicator("OriginalMessage")
        .set_release_profile("Audio")
        .add_audit_trail_event("PADPIDA0000000001X", "MessageCreated", stamp);

    let message = builder.build();
    let header = message.message_header.as_ref().unwrap();
    assert_eq!(header.sent_on_behalf_of.as_ref().unwrap().party_name[0].full_name, "Label");
    assert_eq!(header.comment.as_deref(), Some("first delivery"));
    assert_eq!(header.message_audit_trail.as_ref().unwrap().events[0].date_time, Some(stamp));
    assert_eq!(message.update_indicator.as_deref(), Some("OriginalMessage"));
    assert_eq!(message.release_profile_version_id.as_deref(), Some("Audio"));
}

#[test]
fn test_subBuilders_shouldChainAcrossEntities() {
    let mut builder = Builder::new();
    builder
        .add_video("A1", "ShortFormMusicalWorkVideo")
        .with_title("Song", "")
        .with_artist("Band", "MainArtist", 1)
        .done()
        .add_image("IMG1", "VideoScreenCapture")
        .with_title("Thumb", "")
        .done()
        .add_text("T1", "LyricText")
        .with_title("Lyrics", "")
        .done()
        .add_sound_recording("S1", "MusicalWorkSoundRecording")
        .with_title("Song (Audio)", "")
        .with_label("Label", "")
        .done();

    let resources = &builder.build().resource_list;
    assert_eq!(resources.video.len(), 1);
    assert_eq!(resources.image.len(), 1);
    assert_eq!(resources.text[0].reference_title.as_ref().unwrap().title_text, "Lyrics");
    assert_eq!(
        resources.sound_recording[0].reference_title.as_ref().unwrap().title_text,
        "Song (Audio)"
    );
    assert_eq!(resources.references().collect::<Vec<_>>(), vec!["S1", "A1", "IMG1", "T1"]);
}

#[test]
fn test_withTitle_onSecondVideo_shouldNotTouchFirst() {
    let mut builder = Builder::new();
    builder.add_video("A1", "").with_title("First", "").done();
    builder.add_video("A2", "").with_title("Second", "").done();

    let videos = &builder.build().resource_list.video;
    assert_eq!(videos[0].video_details_by_territory[0].title[0].title_text, "First");
    assert_eq!(videos[1].video_details_by_territory[0].title[0].title_text, "Second");
    assert_eq!(videos[1].reference_title.as_ref().unwrap().title_text, "Second");
}

#[test]
fn test_withParentalWarning_withoutTerritory_shouldCreateSingleWorldwideSection() {
    let mut builder = Builder::new();
    builder
        .add_video("A1", "")
        .with_parental_warning("Explicit")
        .with_genre("Pop", "")
        .done();

    let sections = &builder.build().resource_list.video[0].video_details_by_territory;
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].territory_code, vec!["Worldwide"]);
    assert_eq!(sections[0].parental_warning_type, vec!["Explicit"]);
}

#[test]
fn test_defaultTerritory_fromConfig_shouldBeUsed() {
    let config = MessageConfig { default_territory: "US".to_string(), ..Default::default() };
    let mut builder = Builder::with_config(config);
    builder.add_release("R1", "").with_genre("Pop", "").done();

    let sections = &builder.build().release_list.release[0].release_details_by_territory;
    assert_eq!(sections[0].territory_code, vec!["US"]);
}

#[test]
fn test_resourceLevelSetters_shouldNotCreateTerritorySections() {
    let mut builder = Builder::new();
    builder
        .add_video("A1", "")
        .with_isrc("USRC17607839")
        .with_duration("PT3M10S")
        .with_creation_date("2024-01-01", true)
        .add_proprietary_id("YOUTUBE:CHANNEL", "UC123")
        .done();

    let video = &builder.build().resource_list.video[0];
    assert!(video.video_details_by_territory.is_empty());
    assert_eq!(video.video_id.len(), 2);
    assert_eq!(video.creation_date.as_ref().unwrap().is_approximate, Some(true));
}

#[test]
fn test_addCollection_shouldListResources() {
    let mut builder = Builder::new();
    builder
        .add_collection("X1", "Playlist", "Best of", &["A1", "A2"])
        .add_collection("X2", "", "Empty", &[]);

    let collections = &builder.build().collection_list.as_ref().unwrap().collection;
    assert_eq!(collections.len(), 2);
    let references = collections[0].collection_resource_reference_list.as_ref().unwrap();
    assert_eq!(references.collection_resource_reference, vec!["A1", "A2"]);
    assert_eq!(collections[1].collection_type, None);
    assert!(collections[1].collection_resource_reference_list.is_none());
}

#[test]
fn test_releaseIds_shouldListIcpnGridAndIsrc() {
    let mut builder = Builder::new();
    builder
        .add_release("R1", "Album")
        .with_upc("036000291452")
        .with_grid("A10302B0001234567C")
        .done()
        .add_release("R2", "TrackRelease")
        .with_isrc("USRC17607839")
        .with_catalog_number("CAT-1")
        .done();

    let message = builder.build();
    assert_eq!(
        message.release_ids(),
        vec!["036000291452", "A10302B0001234567C", "USRC17607839"]
    );
    assert_eq!(message.main_release().map(|r| r.release_reference.as_str()), Some("R1"));
}

#[test]
fn test_releaseTerritory_withExcludedCodes_shouldCreateSeparateSection() {
    let mut builder = Builder::new();
    builder
        .add_release("R1", "")
        .with_territory(&["Worldwide"])
        .with_release_date("2024-05-01")
        .with_excluded_territory(&["CN", "RU"])
        .with_release_date("2024-06-01")
        .done();

    let sections = &builder.build().release_list.release[0].release_details_by_territory;
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1].excluded_territory_code, vec!["CN", "RU"]);
    assert_eq!(sections[1].release_date.as_ref().unwrap().value, "2024-06-01");
}

#[test]
fn test_releaseDescriptors_shouldLandInFocusedSection() {
    let mut builder = Builder::new();
    builder
        .add_release("R1", "VideoSingle")
        .with_title("Song", "Remix")
        .with_territory_title("Song", "Remix")
        .with_display_artist_name("Band", "")
        .with_artist("Band", "MainArtist", 1)
        .with_artist("", "FeaturedArtist", 2)
        .with_label("Label", "en")
        .with_made_for_kids()
        .with_marketing_comment("New single", "")
        .with_keywords("pop,summer", "")
        .done();

    let release = &builder.build().release_list.release[0];
    assert_eq!(release.reference_title.as_ref().unwrap().sub_title.as_deref(), Some("Remix"));
    let section = &release.release_details_by_territory[0];
    assert_eq!(section.display_artist.len(), 1);
    assert_eq!(section.av_rating[0].rating_text, "MadeForKids");
    let comment = section.marketing_comment.as_ref().unwrap();
    assert_eq!(comment.language_and_script_code.as_deref(), Some("en"));
    assert_eq!(section.keywords[0].value, "pop,summer");
}

#[test]
fn test_intoMessage_shouldHandOverTree() {
    let mut builder = Builder::new();
    builder.add_release("R1", "").done();

    let message = builder.into_message();
    assert_eq!(message.release_list.release.len(), 1);
}
