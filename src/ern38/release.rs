/*!
 * ERN 3.8 releases and their territory sections.
 */

use serde::{Deserialize, Serialize};

use super::common::{
    AvRating, CLine, DisplayArtist, EventDate, Genre, LocalizedText, PLine, ProprietaryId,
    ReferenceTitle, Title,
};
use super::territory::territory_section;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseList {
    #[serde(rename = "Release", skip_serializing_if = "Vec::is_empty")]
    pub release: Vec<Release>,
}

/// ICPN (UPC or EAN) of a release; `IsEan` marks 13-digit codes
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
    #[serde(rename = "ISRC", skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    #[serde(rename = "ICPN", skip_serializing_if = "Option::is_none")]
    pub icpn: Option<Icpn>,
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseResourceReferenceList {
    #[serde(rename = "ReleaseResourceReference", skip_serializing_if = "Vec::is_empty")]
    pub release_resource_reference: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    #[serde(rename = "ReleaseId", skip_serializing_if = "Vec::is_empty")]
    pub release_id: Vec<ReleaseId>,
    #[serde(rename = "ReleaseReference")]
    pub release_reference: String,
    #[serde(rename = "ReferenceTitle", skip_serializing_if = "Option::is_none")]
    pub reference_title: Option<ReferenceTitle>,
    #[serde(rename = "ReleaseResourceReferenceList", skip_serializing_if = "Option::is_none")]
    pub release_resource_reference_list: Option<ReleaseResourceReferenceList>,
    #[serde(rename = "ReleaseType", skip_serializing_if = "Vec::is_empty")]
    pub release_type: Vec<String>,
    #[serde(rename = "ReleaseDetailsByTerritory", skip_serializing_if = "Vec::is_empty")]
    pub release_details_by_territory: Vec<ReleaseDetailsByTerritory>,
    #[serde(rename = "Duration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "PLine", skip_serializing_if = "Vec::is_empty")]
    pub p_line: Vec<PLine>,
    #[serde(rename = "CLine", skip_serializing_if = "Vec::is_empty")]
    pub c_line: Vec<CLine>,
}

/// Release related to the one being described (e.g. `IsVideoOf`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedRelease {
    #[serde(rename = "ReleaseRelationshipType")]
    pub release_relationship_type: String,
    #[serde(rename = "ReleaseId")]
    pub release_id: ReleaseId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDetailsByTerritory {
    #[serde(rename = "TerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub territory_code: Vec<String>,
    #[serde(rename = "ExcludedTerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub excluded_territory_code: Vec<String>,
    #[serde(rename = "DisplayArtistName", skip_serializing_if = "Vec::is_empty")]
    pub display_artist_name: Vec<LocalizedText>,
    #[serde(rename = "LabelName", skip_serializing_if = "Vec::is_empty")]
    pub label_name: Vec<LocalizedText>,
    #[serde(rename = "Title", skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<Title>,
    #[serde(rename = "DisplayArtist", skip_serializing_if = "Vec::is_empty")]
    pub display_artist: Vec<DisplayArtist>,
    #[serde(rename = "ParentalWarningType", skip_serializing_if = "Vec::is_empty")]
    pub parental_warning_type: Vec<String>,
    #[serde(rename = "AvRating", skip_serializing_if = "Vec::is_empty")]
    pub av_rating: Vec<AvRating>,
    #[serde(rename = "RelatedRelease", skip_serializing_if = "Vec::is_empty")]
    pub related_release: Vec<RelatedRelease>,
    #[serde(rename = "ResourceGroup", skip_serializing_if = "Vec::is_empty")]
    pub resource_group: Vec<ResourceGroup>,
    #[serde(rename = "Genre", skip_serializing_if = "Vec::is_empty")]
    pub genre: Vec<Genre>,
    #[serde(rename = "PLine", skip_serializing_if = "Vec::is_empty")]
    pub p_line: Vec<PLine>,
    #[serde(rename = "CLine", skip_serializing_if = "Vec::is_empty")]
    pub c_line: Vec<CLine>,
    #[serde(rename = "ReleaseDate", skip_serializing_if = "Option::is_none")]
    pub release_date: Option<EventDate>,
    #[serde(rename = "OriginalReleaseDate", skip_serializing_if = "Option::is_none")]
    pub original_release_date: Option<EventDate>,
    #[serde(rename = "Keywords", skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<LocalizedText>,
    #[serde(rename = "MarketingComment", skip_serializing_if = "Option::is_none")]
    pub marketing_comment: Option<LocalizedText>,
}

/// Ordered group of resources within a release
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceGroup {
    #[serde(rename = "Title", skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<Title>,
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

/// Resource attached to a content item (cover art, thumbnails)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedReleaseResourceReference {
    #[serde(rename = "@LinkDescription", skip_serializing_if = "Option::is_none")]
    pub link_description: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}

territory_section!(ReleaseDetailsByTerritory);
