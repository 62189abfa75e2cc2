/*!
 * Composites shared by ERN 4.3 resources and releases.
 *
 * ERN 4.3 carries descriptive fields directly on the resource or release;
 * artists, contributors and rights controllers point into the `PartyList`
 * by reference instead of embedding names.
 */

use serde::{Deserialize, Serialize};

/// Namespaced identifier outside the industry code systems
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProprietaryId {
    #[serde(rename = "@Namespace")]
    pub namespace: String,
    #[serde(rename = "$text")]
    pub value: String,
}

impl ProprietaryId {
    pub fn new(namespace: &str, value: &str) -> Self {
        Self { namespace: namespace.to_string(), value: value.to_string() }
    }
}

/// Character data with optional language and territory attributes.
///
/// Used for `DisplayTitleText`, `DisplayArtistName`, `Keywords`, `MarketingComment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    #[serde(rename = "@LanguageAndScriptCode", skip_serializing_if = "Option::is_none")]
    pub language_and_script_code: Option<String>,
    #[serde(rename = "@ApplicableTerritoryCode", skip_serializing_if = "Option::is_none")]
    pub applicable_territory_code: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}

impl LocalizedText {
    pub fn new(value: &str, language: Option<&str>) -> Self {
        Self {
            language_and_script_code: language.map(str::to_string),
            applicable_territory_code: None,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayTitle {
    #[serde(rename = "@ApplicableTerritoryCode", skip_serializing_if = "Option::is_none")]
    pub applicable_territory_code: Option<String>,
    #[serde(rename = "@IsDefault", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(rename = "TitleText")]
    pub title_text: String,
    #[serde(rename = "SubTitle", skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
}

impl DisplayTitle {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title_text: title.to_string(),
            sub_title: (!subtitle.is_empty()).then(|| subtitle.to_string()),
            ..Default::default()
        }
    }
}

/// Artist credited for display, by party reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayArtist {
    #[serde(rename = "@SequenceNumber", skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,
    #[serde(rename = "ArtistPartyReference")]
    pub artist_party_reference: String,
    #[serde(rename = "DisplayArtistRole")]
    pub display_artist_role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    #[serde(rename = "@SequenceNumber", skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,
    #[serde(rename = "ContributorPartyReference")]
    pub contributor_party_reference: String,
    #[serde(rename = "Role", skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegatedUsageRights {
    #[serde(rename = "UseType", skip_serializing_if = "Vec::is_empty")]
    pub use_type: Vec<String>,
    #[serde(rename = "TerritoryOfRightsDelegation", skip_serializing_if = "Vec::is_empty")]
    pub territory_of_rights_delegation: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRightsController {
    #[serde(rename = "RightsControllerPartyReference")]
    pub rights_controller_party_reference: String,
    #[serde(rename = "RightsControlType", skip_serializing_if = "Vec::is_empty")]
    pub rights_control_type: Vec<String>,
    #[serde(rename = "RightSharePercentage", skip_serializing_if = "Option::is_none")]
    pub right_share_percentage: Option<String>,
    #[serde(rename = "DelegatedUsageRights", skip_serializing_if = "Vec::is_empty")]
    pub delegated_usage_rights: Vec<DelegatedUsageRights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PLine {
    #[serde(rename = "Year", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "PLineText")]
    pub p_line_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CLine {
    #[serde(rename = "Year", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "CLineText")]
    pub c_line_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    #[serde(rename = "GenreText")]
    pub genre_text: String,
    #[serde(rename = "SubGenre", skip_serializing_if = "Option::is_none")]
    pub sub_genre: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDate {
    #[serde(rename = "@IsApproximate", skip_serializing_if = "Option::is_none")]
    pub is_approximate: Option<bool>,
    #[serde(rename = "@ApplicableTerritoryCode", skip_serializing_if = "Option::is_none")]
    pub applicable_territory_code: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}

impl EventDate {
    pub fn new(value: &str, is_approximate: bool) -> Self {
        Self {
            is_approximate: is_approximate.then_some(true),
            applicable_territory_code: None,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvRating {
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Agency", skip_serializing_if = "Option::is_none")]
    pub agency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    #[serde(rename = "URI")]
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalDetails {
    #[serde(rename = "TechnicalResourceDetailsReference")]
    pub technical_resource_details_reference: String,
    #[serde(rename = "File", skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
}

impl TechnicalDetails {
    pub fn new(reference: &str, uri: &str) -> Self {
        Self {
            technical_resource_details_reference: reference.to_string(),
            file: Some(File { uri: uri.to_string() }),
        }
    }
}
