/*!
 * Tests for the ERN 4.3 builder
 */

use ddex_ern::app_config::{MessageConfig, MessageControlType};
use ddex_ern::ern43::Builder;
use ddex_ern::identifiers::YOUTUBE_DPID;

#[test]
fn test_new_shouldStampVersionConstants() {
    let builder = Builder::new();
    let message = builder.build();

    assert_eq!(message.xmlns_ern, "http://ddex.net/xml/ern/43");
    assert!(message.party_list.party.is_empty());
    assert!(message.message_header.is_none());
}

#[test]
fn test_withConfig_shouldApplyAvsVersion() {
    let config = MessageConfig { avs_version_id: Some("4".to_string()), ..Default::default() };
    let mut builder = Builder::with_config(config);
    builder.set_avs_version("5").set_language("ja");

    let message = builder.build();
    assert_eq!(message.avs_version_id.as_deref(), Some("5"));
    assert_eq!(message.language_and_script_code, "ja");
    assert_eq!(builder.config().avs_version_id.as_deref(), Some("4"));
}

#[test]
fn test_setHeader_shouldUsePlainDpidForParties() {
    let mut builder = Builder::new();
    builder
        .set_header("M", "T", "PADPIDA0000000001X", "Label")
        .add_youtube_recipient()
        .set_message_control_type(MessageControlType::LiveMessage);

    let header = builder.build().message_header.as_ref().unwrap();
    assert_eq!(header.message_sender.as_ref().unwrap().party_id, "PADPIDA0000000001X");
    assert_eq!(header.message_recipient[0].party_id, YOUTUBE_DPID);
    assert_eq!(header.message_control_type, Some(MessageControlType::LiveMessage));
}

#[test]
fn test_addPartyWithIsni_shouldStoreIsni() {
    let mut builder = Builder::new();
    builder.add_party_with_isni("P1", "Singer", "0000000121032683");

    let party = &builder.build().party_list.party[0];
    assert_eq!(party.party_reference, "P1");
    assert_eq!(party.party_id[0].isni.as_deref(), Some("0000000121032683"));
    assert_eq!(party.party_name[0].full_name, "Singer");
    assert!(builder.build().party_list.contains("P1"));
    assert!(!builder.build().party_list.contains("P2"));
}

#[test]
fn test_videoSetters_shouldWriteFlatFields() {
    let mut builder = Builder::new();
    builder
        .add_video("A1", "ShortFormMusicalWorkVideo")
        .with_title("Song", "")
        .with_display_artist_name("Band", "")
        .with_parental_warning("NotExplicit")
        .with_genre("Pop", "Synth")
        .with_pline(2024, "Label")
        .with_cline(2024, "Label")
        .with_technical_details("T1", "song.mp4")
        .add_keywords(&["pop", "summer"])
        .add_keywords_with_language("de", &["sommer"])
        .with_isrc("USRC17607839")
        .done();

    let video = &builder.build().resource_list.video[0];
    assert_eq!(video.display_artist_name[0].language_and_script_code.as_deref(), Some("en"));
    assert_eq!(video.parental_warning_type, vec!["NotExplicit"]);
    assert_eq!(video.genre[0].sub_genre.as_deref(), Some("Synth"));
    assert_eq!(video.technical_details[0].file.as_ref().unwrap().uri, "song.mp4");
    assert_eq!(video.keywords.len(), 3);
    assert_eq!(video.keywords[2].language_and_script_code.as_deref(), Some("de"));
    assert_eq!(video.resource_id[0].isrc.as_deref(), Some("USRC17607839"));
}

#[test]
fn test_imageAndText_shouldTakeDisplayTitleText() {
    let mut builder = Builder::new();
    builder
        .add_image("IMG1", "FrontCoverImage")
        .with_title("Cover")
        .with_creation_date("2024-01-01", false)
        .add_proprietary_id("LABEL", "img-1")
        .done()
        .add_text("T1", "LyricText")
        .with_title("Lyrics")
        .done();

    let resources = &builder.build().resource_list;
    assert_eq!(resources.image[0].display_title_text[0].value, "Cover");
    assert_eq!(resources.image[0].creation_date.as_ref().unwrap().is_approximate, None);
    assert_eq!(resources.image[0].resource_id[0].proprietary_id[0].namespace, "LABEL");
    assert_eq!(resources.text[0].display_title_text[0].value, "Lyrics");
}

#[test]
fn test_releaseSetters_shouldWriteFlatFields() {
    let mut builder = Builder::new();
    builder
        .add_release("R1", "Album")
        .with_title("Album", "Deluxe")
        .with_artist("P1", "MainArtist", 1)
        .with_label("PL1", "")
        .with_ean("4006381333931")
        .with_release_date("2024-05-01")
        .with_original_release_date("2020-05-01")
        .with_duration("PT40M")
        .with_av_rating("12", "FSK")
        .done();

    let release = &builder.build().release_list.release[0];
    assert_eq!(release.release_type, vec!["Album"]);
    assert_eq!(release.display_title[0].sub_title.as_deref(), Some("Deluxe"));
    assert_eq!(release.release_id[0].icpn.as_ref().unwrap().is_ean, Some(true));
    assert_eq!(release.release_date.as_ref().unwrap().value, "2024-05-01");
    assert_eq!(release.av_rating[0].agency.as_deref(), Some("FSK"));
    assert_eq!(builder.build().release_ids(), vec!["4006381333931"]);
}

#[test]
fn test_addDeal_shouldAppendToExistingReleaseDeal() {
    let mut builder = Builder::new();
    builder
        .add_release_deal("R1")
        .add_deal()
        .with_commercial_model("RightsClaimModel")
        .with_rights_claim_policy("Monetize")
        .done()
        .done();
    builder.add_deal("R1").with_commercial_model("AdvertisementSupportedModel");

    let release_deals = &builder.build().deal_list.release_deal;
    assert_eq!(release_deals.len(), 1);
    assert_eq!(release_deals[0].deal.len(), 2);
    let second = release_deals[0].deal[1].deal_terms.as_ref().unwrap();
    assert_eq!(second.commercial_model_type, vec!["AdvertisementSupportedModel"]);
    assert!(second.rights_claim_policy.is_empty());
}
