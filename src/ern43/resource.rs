/*!
 * ERN 4.3 resources. All descriptive fields sit flat on the resource.
 */

use serde::{Deserialize, Serialize};

use super::common::{
    CLine, Contributor, DisplayArtist, DisplayTitle, EventDate, Genre, LocalizedText, PLine,
    ProprietaryId, ResourceRightsController, TechnicalDetails,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceList {
    #[serde(rename = "SoundRecording", skip_serializing_if = "Vec::is_empty")]
    pub sound_recording: Vec<SoundRecording>,
    #[serde(rename = "Video", skip_serializing_if = "Vec::is_empty")]
    pub video: Vec<Video>,
    #[serde(rename = "Image", skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<Image>,
    #[serde(rename = "Text", skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<Text>,
}

impl ResourceList {
    /// References of every resource, in list order
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.sound_recording
            .iter()
            .map(|r| r.resource_reference.as_str())
            .chain(self.video.iter().map(|r| r.resource_reference.as_str()))
            .chain(self.image.iter().map(|r| r.resource_reference.as_str()))
            .chain(self.text.iter().map(|r| r.resource_reference.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceId {
    #[serde(rename = "ISRC", skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    #[serde(rename = "ProprietaryId", skip_serializing_if = "Vec::is_empty")]
    pub proprietary_id: Vec<ProprietaryId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    #[serde(rename = "ResourceReference")]
    pub resource_reference: String,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,
    #[serde(rename = "ResourceId", skip_serializing_if = "Vec::is_empty")]
    pub resource_id: Vec<ResourceId>,
    #[serde(rename = "DisplayTitleText", skip_serializing_if = "Vec::is_empty")]
    pub display_title_text: Vec<LocalizedText>,
    #[serde(rename = "DisplayTitle", skip_serializing_if = "Vec::is_empty")]
    pub display_title: Vec<DisplayTitle>,
    #[serde(rename = "DisplayArtistName", skip_serializing_if = "Vec::is_empty")]
    pub display_artist_name: Vec<LocalizedText>,
    #[serde(rename = "DisplayArtist", skip_serializing_if = "Vec::is_empty")]
    pub display_artist: Vec<DisplayArtist>,
    #[serde(rename = "Contributor", skip_serializing_if = "Vec::is_empty")]
    pub contributor: Vec<Contributor>,
    #[serde(rename = "ResourceRightsController", skip_serializing_if = "Vec::is_empty")]
    pub resource_rights_controller: Vec<ResourceRightsController>,
    #[serde(rename = "PLine", skip_serializing_if = "Vec::is_empty")]
    pub p_line: Vec<PLine>,
    #[serde(rename = "CLine", skip_serializing_if = "Vec::is_empty")]
    pub c_line: Vec<CLine>,
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<EventDate>,
    #[serde(rename = "ParentalWarningType", skip_serializing_if = "Vec::is_empty")]
    pub parental_warning_type: Vec<String>,
    #[serde(rename = "Genre", skip_serializing_if = "Vec::is_empty")]
    pub genre: Vec<Genre>,
    #[serde(rename = "Keywords", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<LocalizedText>,
    #[serde(rename = "TechnicalDetails", skip_serializing_if = "Vec::is_empty")]
    pub technical_details: Vec<TechnicalDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundRecording {
    #[serde(rename = "ResourceReference")]
    pub resource_reference: String,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub sound_recording_type: Option<String>,
    #[serde(rename = "ResourceId", skip_serializing_if = "Vec::is_empty")]
    pub resource_id: Vec<ResourceId>,
    #[serde(rename = "DisplayTitleText", skip_serializing_if = "Vec::is_empty")]
    pub display_title_text: Vec<LocalizedText>,
    #[serde(rename = "DisplayTitle", skip_serializing_if = "Vec::is_empty")]
    pub display_title: Vec<DisplayTitle>,
    #[serde(rename = "DisplayArtistName", skip_serializing_if = "Vec::is_empty")]
    pub display_artist_name: Vec<LocalizedText>,
    #[serde(rename = "DisplayArtist", skip_serializing_if = "Vec::is_empty")]
    pub display_artist: Vec<DisplayArtist>,
    #[serde(rename = "Contributor", skip_serializing_if = "Vec::is_empty")]
    pub contributor: Vec<Contributor>,
    #[serde(rename = "ResourceRightsController", skip_serializing_if = "Vec::is_empty")]
    pub resource_rights_controller: Vec<ResourceRightsController>,
    #[serde(rename = "PLine", skip_serializing_if = "Vec::is_empty")]
    pub p_line: Vec<PLine>,
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<EventDate>,
    #[serde(rename = "ParentalWarningType", skip_serializing_if = "Vec::is_empty")]
    pub parental_warning_type: Vec<String>,
    #[serde(rename = "Genre", skip_serializing_if = "Vec::is_empty")]
    pub genre: Vec<Genre>,
    #[serde(rename = "Keywords", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<LocalizedText>,
    #[serde(rename = "TechnicalDetails", skip_serializing_if = "Vec::is_empty")]
    pub technical_details: Vec<TechnicalDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(rename = "ResourceReference")]
    pub resource_reference: String,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    #[serde(rename = "ResourceId", skip_serializing_if = "Vec::is_empty")]
    pub resource_id: Vec<ResourceId>,
    #[serde(rename = "DisplayTitleText", skip_serializing_if = "Vec::is_empty")]
    pub display_title_text: Vec<LocalizedText>,
    #[serde(rename = "CLine", skip_serializing_if = "Vec::is_empty")]
    pub c_line: Vec<CLine>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<EventDate>,
    #[serde(rename = "ParentalWarningType", skip_serializing_if = "Vec::is_empty")]
    pub parental_warning_type: Vec<String>,
    #[serde(rename = "TechnicalDetails", skip_serializing_if = "Vec::is_empty")]
    pub technical_details: Vec<TechnicalDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    #[serde(rename = "ResourceReference")]
    pub resource_reference: String,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,
    #[serde(rename = "ResourceId", skip_serializing_if = "Vec::is_empty")]
    pub resource_id: Vec<ResourceId>,
    #[serde(rename = "DisplayTitleText", skip_serializing_if = "Vec::is_empty")]
    pub display_title_text: Vec<LocalizedText>,
}
