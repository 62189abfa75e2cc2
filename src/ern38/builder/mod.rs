/*!
 * Fluent construction of ERN 3.8 messages.
 *
 * `Builder` owns the message. Every `add_*` call appends an entity to the
 * matching list and returns a sub-builder that holds the builder plus the
 * index of that entity, so chained setters mutate the stored value in place.
 * `done()` hands the parent back. Only one sub-builder can be alive at a
 * time, which keeps the indices stable.
 */

mod deal;
mod release;
mod resource;

use std::path::Path;

use chrono::{DateTime, FixedOffset, Utc};
use log::debug;

pub use deal::{DealBuilder, ReleaseDealBuilder};
pub use release::{ReleaseBuilder, ResourceGroupBuilder};
pub use resource::{ImageBuilder, SoundRecordingBuilder, TextBuilder, VideoBuilder};

use super::common::Title;
use super::deal::ReleaseDeal;
use super::header::{MessageAuditTrail, MessageAuditTrailEvent, MessageHeader, MessagingParty};
use super::message::{
    Collection, CollectionList, CollectionResourceReferenceList, NewReleaseMessage,
};
use super::release::Release;
use super::resource::{Image, SoundRecording, Text, Video};
use crate::app_config::{MessageConfig, MessageControlType};
use crate::errors::Result;
use crate::identifiers::{
    YOUTUBE_CONTENT_ID_DPID, YOUTUBE_CONTENT_ID_NAME, YOUTUBE_DPID, YOUTUBE_NAME,
};
use crate::xml::write_document;

/// Builder of one ERN 3.8 `NewReleaseMessage`
#[derive(Debug, Clone)]
pub struct Builder {
    message: NewReleaseMessage,
    config: MessageConfig,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Builder with the default configuration (language "en", `Video` profile)
    pub fn new() -> Self {
        Self::with_config(MessageConfig::default())
    }

    pub fn with_config(config: MessageConfig) -> Self {
        Self {
            message: NewReleaseMessage::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &MessageConfig {
        &self.config
    }

    /// Replace the header with a fresh one for the given sender.
    ///
    /// The creation time is taken now; the control type comes from the configuration.
    pub fn set_header(
        &mut self,
        message_id: &str,
        thread_id: &str,
        sender_id: &str,
        sender_name: &str,
    ) -> &mut Self {
        self.message.message_header = Some(MessageHeader {
            message_thread_id: thread_id.to_string(),
            message_id: message_id.to_string(),
            message_sender: Some(MessagingParty::new(sender_id, sender_name)),
            message_created_date_time: Some(Utc::now().fixed_offset()),
            message_control_type: self.config.message_control_type,
            ..Default::default()
        });
        debug!("Header set for message {} (thread {})", message_id, thread_id);
        self
    }

    fn header_mut(&mut self) -> &mut MessageHeader {
        self.message.message_header.get_or_insert_with(|| {
            debug!("No header yet, starting an empty one");
            MessageHeader::default()
        })
    }

    /// Append a recipient; starts an empty header if none was set
    pub fn add_recipient(&mut self, id: &str, name: &str) -> &mut Self {
        self.header_mut().message_recipient.push(MessagingParty::new(id, name));
        self
    }

    pub fn add_youtube_recipient(&mut self) -> &mut Self {
        self.add_recipient(YOUTUBE_DPID, YOUTUBE_NAME)
    }

    pub fn add_content_id_recipient(&mut self) -> &mut Self {
        self.add_recipient(YOUTUBE_CONTENT_ID_DPID, YOUTUBE_CONTENT_ID_NAME)
    }

    /// Party the sender acts for (e.g. the label behind a distributor)
    pub fn set_sent_on_behalf_of(&mut self, id: &str, name: &str) -> &mut Self {
        self.header_mut().sent_on_behalf_of = Some(MessagingParty::new(id, name));
        self
    }

    pub fn set_language(&mut self, language_and_script_code: &str) -> &mut Self {
        self.message.language_and_script_code = language_and_script_code.to_string();
        self
    }

    pub fn set_release_profile(&mut self, profile_version_id: &str) -> &mut Self {
        self.message.release_profile_version_id = Some(profile_version_id.to_string());
        self
    }

    /// `OriginalMessage` or `UpdateMessage`
    pub fn set_update_indicator(&mut self, indicator: &str) -> &mut Self {
        self.message.update_indicator = Some(indicator.to_string());
        self
    }

    pub fn set_message_control_type(&mut self, control_type: MessageControlType) -> &mut Self {
        self.header_mut().message_control_type = Some(control_type);
        self
    }

    pub fn set_comment(&mut self, comment: &str) -> &mut Self {
        self.header_mut().comment = Some(comment.to_string());
        self
    }

    pub fn add_audit_trail_event(
        &mut self,
        party_reference: &str,
        event_type: &str,
        date_time: DateTime<FixedOffset>,
    ) -> &mut Self {
        self.header_mut()
            .message_audit_trail
            .get_or_insert_with(MessageAuditTrail::default)
            .events
            .push(MessageAuditTrailEvent {
                messaging_party_reference: party_reference.to_string(),
                date_time: Some(date_time),
                event_type_code: event_type.to_string(),
            });
        self
    }

    pub fn add_video(&mut self, reference: &str, video_type: &str) -> VideoBuilder<'_> {
        let videos = &mut self.message.resource_list.video;
        videos.push(Video {
            resource_reference: reference.to_string(),
            video_type: non_empty(video_type),
            ..Default::default()
        });
        let index = videos.len() - 1;

        debug!("Added video {} at index {}", reference, index);
        VideoBuilder::new(self, index)
    }

    pub fn add_image(&mut self, reference: &str, image_type: &str) -> ImageBuilder<'_> {
        let images = &mut self.message.resource_list.image;
        images.push(Image {
            resource_reference: reference.to_string(),
            image_type: non_empty(image_type),
            ..Default::default()
        });
        let index = images.len() - 1;

        debug!("Added image {} at index {}", reference, index);
        ImageBuilder::new(self, index)
    }

    pub fn add_sound_recording(
        &mut self,
        reference: &str,
        recording_type: &str,
    ) -> SoundRecordingBuilder<'_> {
        let recordings = &mut self.message.resource_list.sound_recording;
        recordings.push(SoundRecording {
            resource_reference: reference.to_string(),
            sound_recording_type: non_empty(recording_type),
            ..Default::default()
        });
        let index = recordings.len() - 1;

        debug!("Added sound recording {} at index {}", reference, index);
        SoundRecordingBuilder::new(self, index)
    }

    pub fn add_text(&mut self, reference: &str, text_type: &str) -> TextBuilder<'_> {
        let texts = &mut self.message.resource_list.text;
        texts.push(Text {
            resource_reference: reference.to_string(),
            text_type: non_empty(text_type),
            ..Default::default()
        });
        let index = texts.len() - 1;

        debug!("Added text {} at index {}", reference, index);
        TextBuilder::new(self, index)
    }

    /// Append a collection (playlist, compilation) over the given resources
    pub fn add_collection(
        &mut self,
        reference: &str,
        collection_type: &str,
        title: &str,
        resource_references: &[&str],
    ) -> &mut Self {
        let collection = Collection {
            collection_reference: reference.to_string(),
            collection_type: non_empty(collection_type),
            title: vec![Title::new(title, "")],
            collection_resource_reference_list: (!resource_references.is_empty()).then(|| {
                CollectionResourceReferenceList {
                    collection_resource_reference: resource_references
                        .iter()
                        .map(|r| r.to_string())
                        .collect(),
                }
            }),
        };
        self.message
            .collection_list
            .get_or_insert_with(CollectionList::default)
            .collection
            .push(collection);
        self
    }

    pub fn add_release(&mut self, reference: &str, release_type: &str) -> ReleaseBuilder<'_> {
        let releases = &mut self.message.release_list.release;
        releases.push(Release {
            release_reference: reference.to_string(),
            release_type: non_empty(release_type).into_iter().collect(),
            ..Default::default()
        });
        let index = releases.len() - 1;

        debug!("Added release {} at index {}", reference, index);
        ReleaseBuilder::new(self, index)
    }

    /// Append a deal wrapper for one release; add deals through the returned builder
    pub fn add_release_deal(&mut self, release_reference: &str) -> ReleaseDealBuilder<'_> {
        let release_deals = &mut self.message.deal_list.release_deal;
        release_deals.push(ReleaseDeal {
            deal_release_reference: release_reference.to_string(),
            deal: Vec::new(),
        });
        let index = release_deals.len() - 1;

        debug!("Added release deal for {} at index {}", release_reference, index);
        ReleaseDealBuilder::new(self, index)
    }

    /// The message as built so far
    pub fn build(&self) -> &NewReleaseMessage {
        &self.message
    }

    pub fn into_message(self) -> NewReleaseMessage {
        self.message
    }

    pub fn validate(&self) -> Result<()> {
        Ok(self.message.validate()?)
    }

    /// Indented XML without declaration
    pub fn serialize(&self) -> Result<Vec<u8>> {
        Ok(self.message.to_xml()?.into_bytes())
    }

    pub fn to_xml_with_declaration(&self) -> Result<String> {
        self.message.to_xml_with_declaration()
    }

    /// Serialize and write the document (declaration included) to `path`
    pub fn write_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_document(path, &self.message.to_xml()?)
    }
}

/// `None` for an empty argument, so optional elements stay absent
pub(crate) fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
