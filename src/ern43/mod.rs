/*!
 * DDEX ERN 4.3 (`ern/43`) message model.
 *
 * Resources and releases carry their descriptive fields directly. People and
 * companies live once in the `PartyList`; artists, contributors, rights
 * controllers and labels point to them by `PartyReference`.
 *
 * ```no_run
 * use ddex_ern::ern43::Builder;
 *
 * let mut builder = Builder::new();
 * builder
 *     .set_header("MSG1", "THR1", "PADPIDA0000000001X", "Label")
 *     .add_youtube_recipient()
 *     .add_party("P1", "The Band", "Band, The");
 * builder
 *     .add_video("A1", "ShortFormMusicalWorkVideo")
 *     .with_title("Song", "")
 *     .with_artist("P1", "MainArtist", 1)
 *     .done()
 *     .add_release("R1", "VideoSingle")
 *     .with_title("Song", "")
 *     .done();
 * builder.add_deal("R1").with_commercial_model("AdvertisementSupportedModel");
 * builder.write_file("song.xml").unwrap();
 * ```
 */

pub mod builder;
pub mod common;
pub mod deal;
pub mod header;
pub mod message;
pub mod party;
pub mod release;
pub mod resource;
mod validation;

pub use builder::{
    Builder, DealBuilder, ImageBuilder, ReleaseBuilder, ReleaseDealBuilder, ResourceGroupBuilder,
    SoundRecordingBuilder, TextBuilder, VideoBuilder,
};
pub use message::{ERN_NAMESPACE, NewReleaseMessage, ROOT_ELEMENT, SCHEMA_LOCATION};
