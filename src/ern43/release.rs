/*!
 * ERN 4.3 releases.
 */

use serde::{Deserialize, Serialize};

use super::common::{
    AvRating, CLine, DisplayArtist, DisplayTitle, EventDate, Genre, LocalizedText, PLine,
    ProprietaryId,
};
use super::resource::ResourceId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseList {
    #[serde(rename = "Release", skip_serializing_if = "Vec::is_empty")]
    pub release: Vec<Release>,
}

/// UPC or EAN of a release
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icpn {
    #[serde(rename = "@IsEan", skip_serializing_if = "Option::is_none")]
    pub is_ean: Option<bool>,
    #[serde(rename = "$text")]
    pub value: String,
}

impl Icpn {
    pub fn new(value: &str) -> Self {
        Self {
            is_ean: (value.len() == 13).then_some(true),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseId {
    #[serde(rename = "GRid", skip_serializing_if = "Option::is_none")]
    pub grid: Option<String>,
    #[serde(rename = "ICPN", skip_serializing_if = "Option::is_none")]
    pub icpn: Option<Icpn>,
    #[serde(rename = "ISRC", skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    #[serde(rename = "CatalogNumber", skip_serializing_if = "Option::is_none")]
    pub catalog_number: Option<String>,
    #[serde(rename = "ProprietaryId", skip_serializing_if = "Vec::is_empty")]
    pub proprietary_id: Vec<ProprietaryId>,
}

impl ReleaseId {
    /// Every populated identifier value, ICPN first
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.icpn
            .as_ref()
            .map(|icpn| icpn.value.as_str())
            .into_iter()
            .chain(self.grid.as_deref())
            .chain(self.isrc.as_deref())
    }
}

/// Label credit, optionally restricted to one territory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseLabelReference {
    #[serde(rename = "@ApplicableTerritoryCode", skip_serializing_if = "Option::is_none")]
    pub applicable_territory_code: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}

/// Resource related to the release but not part of it (e.g. the audio of a video)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedResource {
    #[serde(rename = "ResourceRelationshipType")]
    pub resource_relationship_type: String,
    #[serde(rename = "ResourceId")]
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    #[serde(rename = "ReleaseReference")]
    pub release_reference: String,
    #[serde(rename = "ReleaseType", skip_serializing_if = "Vec::is_empty")]
    pub release_type: Vec<String>,
    #[serde(rename = "ReleaseId", skip_serializing_if = "Vec::is_empty")]
    pub release_id: Vec<ReleaseId>,
    #[serde(rename = "DisplayTitleText", skip_serializing_if = "Vec::is_empty")]
    pub display_title_text: Vec<LocalizedText>,
    #[serde(rename = "DisplayTitle", skip_serializing_if = "Vec::is_empty")]
    pub display_title: Vec<DisplayTitle>,
    #[serde(rename = "DisplayArtistName", skip_serializing_if = "Vec::is_empty")]
    pub display_artist_name: Vec<LocalizedText>,
    #[serde(rename = "DisplayArtist", skip_serializing_if = "Vec::is_empty")]
    pub display_artist: Vec<DisplayArtist>,
    #[serde(rename = "ReleaseLabelReference", skip_serializing_if = "Vec::is_empty")]
    pub release_label_reference: Vec<ReleaseLabelReference>,
    #[serde(rename = "PLine", skip_serializing_if = "Vec::is_empty")]
    pub p_line: Vec<PLine>,
    #[serde(rename = "CLine", skip_serializing_if = "Vec::is_empty")]
    pub c_line: Vec<CLine>,
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "Genre", skip_serializing_if = "Vec::is_empty")]
    pub genre: Vec<Genre>,
    #[serde(rename = "ReleaseDate", skip_serializing_if = "Option::is_none")]
    pub release_date: Option<EventDate>,
    #[serde(rename = "OriginalReleaseDate", skip_serializing_if = "Option::is_none")]
    pub original_release_date: Option<EventDate>,
    #[serde(rename = "ParentalWarningType", skip_serializing_if = "Vec::is_empty")]
    pub parental_warning_type: Vec<String>,
    #[serde(rename = "AvRating", skip_serializing_if = "Vec::is_empty")]
    pub av_rating: Vec<AvRating>,
    #[serde(rename = "RelatedResource", skip_serializing_if = "Vec::is_empty")]
    pub related_resource: Vec<RelatedResource>,
    #[serde(rename = "ResourceGroup", skip_serializing_if = "Vec::is_empty")]
    pub resource_group: Vec<ResourceGroup>,
    #[serde(rename = "Keywords", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<LocalizedText>,
    #[serde(rename = "MarketingComment", skip_serializing_if = "Option::is_none")]
    pub marketing_comment: Option<LocalizedText>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalTitle {
    #[serde(rename = "TitleText")]
    pub title_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceGroup {
    #[serde(rename = "AdditionalTitle", skip_serializing_if = "Vec::is_empty")]
    pub additional_title: Vec<AdditionalTitle>,
    #[serde(rename = "SequenceNumber", skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,
    #[serde(rename = "ResourceGroupContentItem", skip_serializing_if = "Vec::is_empty")]
    pub resource_group_content_item: Vec<ResourceGroupContentItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceGroupContentItem {
    #[serde(rename = "SequenceNumber", skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,
    #[serde(rename = "ReleaseResourceReference")]
    pub release_resource_reference: String,
    #[serde(rename = "LinkedReleaseResourceReference", skip_serializing_if = "Vec::is_empty")]
    pub linked_release_resource_reference: Vec<LinkedReleaseResourceReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedReleaseResourceReference {
    #[serde(rename = "@LinkDescription", skip_serializing_if = "Option::is_none")]
    pub link_description: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}
