/*!
 * Common test utilities for the ddex-ern test suite
 */

use std::path::Path;

use anyhow::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use tempfile::TempDir;

use ddex_ern::ern38;
use ddex_ern::ern43;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Installs a test logger once; later calls are ignored
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Name and `xmlns:ern` value of the root element of a written document
pub fn read_root(path: &Path) -> Result<(String, String)> {
    let mut reader = Reader::from_file(path)?;
    let mut buffer = Vec::new();

    loop {
        match reader.read_event_into(&mut buffer)? {
            Event::Start(element) | Event::Empty(element) => {
                let name = String::from_utf8(element.name().as_ref().to_vec())?;
                let mut namespace = String::new();
                for attribute in element.attributes() {
                    let attribute = attribute?;
                    if attribute.key.as_ref() == b"xmlns:ern" {
                        namespace = attribute.unescape_value()?.into_owned();
                    }
                }
                return Ok((name, namespace));
            }
            Event::Eof => anyhow::bail!("document has no root element"),
            _ => {}
        }
        buffer.clear();
    }
}

/// Walks the whole document; fails on the first well-formedness error
pub fn assert_well_formed(xml: &str) -> Result<usize> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = true;
    let mut elements = 0;

    loop {
        match reader.read_event()? {
            Event::Start(_) | Event::Empty(_) => elements += 1,
            Event::Eof => return Ok(elements),
            _ => {}
        }
    }
}

/// Minimal valid ERN 3.8 message: header, one video, one release, one deal
pub fn minimal_ern38() -> ern38::Builder {
    let mut builder = ern38::Builder::new();
    builder
        .set_header("MSG-1", "THR-1", "PADPIDA0000000001X", "Test Label")
        .add_youtube_recipient();
    builder
        .add_video("A1", "ShortFormMusicalWorkVideo")
        .with_title("Song", "")
        .with_isrc("USRC17607839")
        .with_duration_seconds(190)
        .done()
        .add_release("R1", "VideoSingle")
        .with_title("Song", "")
        .add_release_resource_reference("A1")
        .add_resource_group("", 1)
        .add_content_item(1, "A1")
        .done()
        .done();
    builder
        .add_release_deal("R1")
        .add_deal()
        .with_commercial_model("AdvertisementSupportedModel")
        .with_use_type("Stream")
        .with_territory("Worldwide")
        .done()
        .done();
    builder
}

/// Minimal valid ERN 4.3 message with one registered artist party
pub fn minimal_ern43() -> ern43::Builder {
    let mut builder = ern43::Builder::new();
    builder
        .set_header("MSG-1", "THR-1", "PADPIDA0000000001X", "Test Label")
        .add_youtube_recipient()
        .add_party("P1", "The Band", "Band, The");
    builder
        .add_video("A1", "ShortFormMusicalWorkVideo")
        .with_title("Song", "")
        .with_artist("P1", "MainArtist", 1)
        .done()
        .add_release("R1", "VideoSingle")
        .with_title("Song", "")
        .with_artist("P1", "MainArtist", 1)
        .add_resource_group("", 1)
        .add_content_item(1, "A1")
        .done()
        .done();
    builder
        .add_deal("R1")
        .with_commercial_model("AdvertisementSupportedModel")
        .with_use_type("Stream")
        .with_territory("Worldwide");
    builder
}
