/*!
 * DDEX ERN 3.8 (`ern/382`) message model.
 *
 * Descriptive metadata of resources and releases is scoped by territory:
 * each `…DetailsByTerritory` section applies to the codes it lists (or to
 * everything except the codes it excludes). Parties are described inline.
 *
 * Start from [`Builder`]:
 *
 * ```no_run
 * use ddex_ern::ern38::Builder;
 *
 * let mut builder = Builder::new();
 * builder
 *     .set_header("MSG1", "THR1", "PADPIDA0000000001X", "Label")
 *     .add_youtube_recipient();
 * builder
 *     .add_video("A1", "ShortFormMusicalWorkVideo")
 *     .with_title("Song", "")
 *     .done()
 *     .add_release("R1", "VideoSingle")
 *     .with_title("Song", "")
 *     .done();
 * builder.write_file("song.xml").unwrap();
 * ```
 */

pub mod builder;
pub mod common;
pub mod deal;
pub mod header;
pub mod message;
pub mod release;
pub mod resource;
pub mod territory;
mod validation;

pub use builder::{
    Builder, DealBuilder, ImageBuilder, ReleaseBuilder, ReleaseDealBuilder, ResourceGroupBuilder,
    SoundRecordingBuilder, TextBuilder, VideoBuilder,
};
pub use message::{
    ERN_NAMESPACE, MESSAGE_SCHEMA_VERSION_ID, NewReleaseMessage, ROOT_ELEMENT, SCHEMA_LOCATION,
};
pub use territory::{TerritoryScope, TerritorySection};
