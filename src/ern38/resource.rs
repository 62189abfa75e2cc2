/*!
 * ERN 3.8 resources: sound recordings, videos, images and texts.
 *
 * Identification, duration and creation date live on the resource itself;
 * nearly every descriptive field lives in the territory sections.
 */

use serde::{Deserialize, Serialize};

use super::common::{
    CLine, DisplayArtist, EventDate, Genre, LocalizedText, PLine, ProprietaryId, ReferenceTitle,
    ResourceContributor, RightsController, TechnicalDetails, Title,
};
use super::territory::territory_section;

/// Lists all resources of the message
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

/// Resource identifier (`VideoId`, `ImageId`, `SoundRecordingId`, `TextId`)
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
    #[serde(rename = "VideoType", skip_serializing_if = "Option::is_none")]
    pub video_type: Option<String>,
    #[serde(rename = "VideoId", skip_serializing_if = "Vec::is_empty")]
    pub video_id: Vec<ResourceId>,
    #[serde(rename = "ResourceReference")]
    pub resource_reference: String,
    #[serde(rename = "ReferenceTitle", skip_serializing_if = "Option::is_none")]
    pub reference_title: Option<ReferenceTitle>,
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<EventDate>,
    #[serde(rename = "VideoDetailsByTerritory", skip_serializing_if = "Vec::is_empty")]
    pub video_details_by_territory: Vec<VideoDetailsByTerritory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoDetailsByTerritory {
    #[serde(rename = "TerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub territory_code: Vec<String>,
    #[serde(rename = "ExcludedTerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub excluded_territory_code: Vec<String>,
    #[serde(rename = "Title", skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<Title>,
    #[serde(rename = "DisplayArtistName", skip_serializing_if = "Vec::is_empty")]
    pub display_artist_name: Vec<LocalizedText>,
    #[serde(rename = "DisplayArtist", skip_serializing_if = "Vec::is_empty")]
    pub display_artist: Vec<DisplayArtist>,
    #[serde(rename = "ResourceContributor", skip_serializing_if = "Vec::is_empty")]
    pub resource_contributor: Vec<ResourceContributor>,
    #[serde(rename = "RightsController", skip_serializing_if = "Vec::is_empty")]
    pub rights_controller: Vec<RightsController>,
    #[serde(rename = "PLine", skip_serializing_if = "Vec::is_empty")]
    pub p_line: Vec<PLine>,
    #[serde(rename = "CLine", skip_serializing_if = "Vec::is_empty")]
    pub c_line: Vec<CLine>,
    #[serde(rename = "Genre", skip_serializing_if = "Vec::is_empty")]
    pub genre: Vec<Genre>,
    #[serde(rename = "ParentalWarningType", skip_serializing_if = "Vec::is_empty")]
    pub parental_warning_type: Vec<String>,
    #[serde(rename = "Keywords", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<LocalizedText>,
    #[serde(rename = "TechnicalVideoDetails", skip_serializing_if = "Vec::is_empty")]
    pub technical_video_details: Vec<TechnicalDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(rename = "ImageType", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    #[serde(rename = "ImageId", skip_serializing_if = "Vec::is_empty")]
    pub image_id: Vec<ResourceId>,
    #[serde(rename = "ResourceReference")]
    pub resource_reference: String,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<EventDate>,
    #[serde(rename = "ImageDetailsByTerritory", skip_serializing_if = "Vec::is_empty")]
    pub image_details_by_territory: Vec<ImageDetailsByTerritory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDetailsByTerritory {
    #[serde(rename = "TerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub territory_code: Vec<String>,
    #[serde(rename = "ExcludedTerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub excluded_territory_code: Vec<String>,
    #[serde(rename = "Title", skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<Title>,
    #[serde(rename = "CLine", skip_serializing_if = "Vec::is_empty")]
    pub c_line: Vec<CLine>,
    #[serde(rename = "ParentalWarningType", skip_serializing_if = "Vec::is_empty")]
    pub parental_warning_type: Vec<String>,
    #[serde(rename = "Keywords", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<LocalizedText>,
    #[serde(rename = "TechnicalImageDetails", skip_serializing_if = "Vec::is_empty")]
    pub technical_image_details: Vec<TechnicalDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundRecording {
    #[serde(rename = "SoundRecordingType", skip_serializing_if = "Option::is_none")]
    pub sound_recording_type: Option<String>,
    #[serde(rename = "SoundRecordingId", skip_serializing_if = "Vec::is_empty")]
    pub sound_recording_id: Vec<ResourceId>,
    #[serde(rename = "ResourceReference")]
    pub resource_reference: String,
    #[serde(rename = "ReferenceTitle", skip_serializing_if = "Option::is_none")]
    pub reference_title: Option<ReferenceTitle>,
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "CreationDate", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<EventDate>,
    #[serde(rename = "SoundRecordingDetailsByTerritory", skip_serializing_if = "Vec::is_empty")]
    pub sound_recording_details_by_territory: Vec<SoundRecordingDetailsByTerritory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundRecordingDetailsByTerritory {
    #[serde(rename = "TerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub territory_code: Vec<String>,
    #[serde(rename = "ExcludedTerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub excluded_territory_code: Vec<String>,
    #[serde(rename = "Title", skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<Title>,
    #[serde(rename = "DisplayArtistName", skip_serializing_if = "Vec::is_empty")]
    pub display_artist_name: Vec<LocalizedText>,
    #[serde(rename = "DisplayArtist", skip_serializing_if = "Vec::is_empty")]
    pub display_artist: Vec<DisplayArtist>,
    #[serde(rename = "ResourceContributor", skip_serializing_if = "Vec::is_empty")]
    pub resource_contributor: Vec<ResourceContributor>,
    #[serde(rename = "LabelName", skip_serializing_if = "Vec::is_empty")]
    pub label_name: Vec<LocalizedText>,
    #[serde(rename = "PLine", skip_serializing_if = "Vec::is_empty")]
    pub p_line: Vec<PLine>,
    #[serde(rename = "Genre", skip_serializing_if = "Vec::is_empty")]
    pub genre: Vec<Genre>,
    #[serde(rename = "ParentalWarningType", skip_serializing_if = "Vec::is_empty")]
    pub parental_warning_type: Vec<String>,
    #[serde(rename = "Keywords", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<LocalizedText>,
    #[serde(rename = "TechnicalSoundRecordingDetails", skip_serializing_if = "Vec::is_empty")]
    pub technical_sound_recording_details: Vec<TechnicalDetails>,
}

/// Text resource (lyrics, booklets)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    #[serde(rename = "TextType", skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,
    #[serde(rename = "TextId", skip_serializing_if = "Vec::is_empty")]
    pub text_id: Vec<ResourceId>,
    #[serde(rename = "ResourceReference")]
    pub resource_reference: String,
    #[serde(rename = "ReferenceTitle", skip_serializing_if = "Option::is_none")]
    pub reference_title: Option<ReferenceTitle>,
}

territory_section!(
    VideoDetailsByTerritory,
    ImageDetailsByTerritory,
    SoundRecordingDetailsByTerritory
);
