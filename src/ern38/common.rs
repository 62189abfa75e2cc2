/*!
 * Composites shared by the ERN 3.8 resource, release and header types.
 *
 * In ERN 3.8 party identity is embedded inline (`PartyName`/`PartyId`)
 * wherever an artist, contributor or rights controller appears.
 */

use serde::{Deserialize, Serialize};

/// Party identifier, optionally namespaced (e.g. `Namespace="DPID"`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyId {
    #[serde(rename = "@Namespace", skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}

impl PartyId {
    pub fn new(value: &str) -> Self {
        Self { namespace: None, value: value.to_string() }
    }
}

/// Localized party name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Name {
    #[serde(rename = "@LanguageAndScriptCode", skip_serializing_if = "Option::is_none")]
    pub language_and_script_code: Option<String>,
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "FullNameAsciiTranscribed", skip_serializing_if = "Option::is_none")]
    pub full_name_ascii_transcribed: Option<String>,
}

impl Name {
    pub fn new(full_name: &str) -> Self {
        Self { full_name: full_name.to_string(), ..Default::default() }
    }
}

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

/// Character data with an optional language attribute.
///
/// Used for `DisplayArtistName`, `LabelName`, `Keywords`, `MarketingComment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    #[serde(rename = "@LanguageAndScriptCode", skip_serializing_if = "Option::is_none")]
    pub language_and_script_code: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}

impl LocalizedText {
    pub fn new(value: &str, language: Option<&str>) -> Self {
        Self {
            language_and_script_code: language.map(str::to_string),
            value: value.to_string(),
        }
    }
}

/// `ReferenceTitle` of a resource or release
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTitle {
    #[serde(rename = "TitleText")]
    pub title_text: String,
    #[serde(rename = "SubTitle", skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
}

/// Territory-level `Title`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Title {
    #[serde(rename = "@TitleType", skip_serializing_if = "Option::is_none")]
    pub title_type: Option<String>,
    #[serde(rename = "@LanguageAndScriptCode", skip_serializing_if = "Option::is_none")]
    pub language_and_script_code: Option<String>,
    #[serde(rename = "TitleText")]
    pub title_text: String,
    #[serde(rename = "SubTitle", skip_serializing_if = "Option::is_none")]
    pub sub_title: Option<String>,
}

impl Title {
    /// Title with an optional subtitle; an empty subtitle is left out
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title_text: title.to_string(),
            sub_title: (!subtitle.is_empty()).then(|| subtitle.to_string()),
            ..Default::default()
        }
    }
}

/// Artist shown to consumers, identity inline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayArtist {
    #[serde(rename = "@SequenceNumber", skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,
    #[serde(rename = "PartyId", skip_serializing_if = "Vec::is_empty")]
    pub party_id: Vec<PartyId>,
    #[serde(rename = "PartyName", skip_serializing_if = "Vec::is_empty")]
    pub party_name: Vec<Name>,
    #[serde(rename = "ArtistRole", skip_serializing_if = "Vec::is_empty")]
    pub artist_role: Vec<String>,
}

/// Contributor to a resource (producer, director, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceContributor {
    #[serde(rename = "@SequenceNumber", skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u32>,
    #[serde(rename = "PartyId", skip_serializing_if = "Vec::is_empty")]
    pub party_id: Vec<PartyId>,
    #[serde(rename = "PartyName", skip_serializing_if = "Vec::is_empty")]
    pub party_name: Vec<Name>,
    #[serde(rename = "ResourceContributorRole", skip_serializing_if = "Vec::is_empty")]
    pub role: Vec<String>,
}

/// Rights delegated to a platform by a rights controller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegatedUsageRights {
    #[serde(rename = "UseType", skip_serializing_if = "Vec::is_empty")]
    pub use_type: Vec<String>,
    #[serde(rename = "TerritoryOfRightsDelegation", skip_serializing_if = "Vec::is_empty")]
    pub territory_of_rights_delegation: Vec<String>,
}

/// Party controlling rights in a resource within a territory section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RightsController {
    #[serde(rename = "PartyId", skip_serializing_if = "Vec::is_empty")]
    pub party_id: Vec<PartyId>,
    #[serde(rename = "PartyName", skip_serializing_if = "Vec::is_empty")]
    pub party_name: Vec<Name>,
    #[serde(rename = "RightsControllerRole", skip_serializing_if = "Vec::is_empty")]
    pub rights_controller_role: Vec<String>,
    #[serde(rename = "RightSharePercentage", skip_serializing_if = "Option::is_none")]
    pub right_share_percentage: Option<String>,
    #[serde(rename = "DelegatedUsageRights", skip_serializing_if = "Vec::is_empty")]
    pub delegated_usage_rights: Vec<DelegatedUsageRights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    #[serde(rename = "GenreText")]
    pub genre_text: String,
    #[serde(rename = "SubGenre", skip_serializing_if = "Option::is_none")]
    pub sub_genre: Option<String>,
}

/// Phonographic copyright line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PLine {
    #[serde(rename = "Year", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "PLineText")]
    pub p_line_text: String,
}

/// Copyright line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CLine {
    #[serde(rename = "Year", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "CLineText")]
    pub c_line_text: String,
}

/// Date of an event (creation, release); element name comes from the field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDate {
    #[serde(rename = "@IsApproximate", skip_serializing_if = "Option::is_none")]
    pub is_approximate: Option<bool>,
    #[serde(rename = "@TerritoryCode", skip_serializing_if = "Option::is_none")]
    pub territory_code: Option<String>,
    #[serde(rename = "$text")]
    pub value: String,
}

impl EventDate {
    pub fn new(value: &str, is_approximate: bool) -> Self {
        Self {
            is_approximate: is_approximate.then_some(true),
            territory_code: None,
            value: value.to_string(),
        }
    }
}

/// Audio-visual rating (e.g. MadeForKids)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvRating {
    #[serde(rename = "RatingText")]
    pub rating_text: String,
    #[serde(rename = "RatingAgency", skip_serializing_if = "Option::is_none")]
    pub rating_agency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    #[serde(rename = "URI")]
    pub uri: String,
}

/// Technical delivery details; the element name depends on the resource kind
/// (`TechnicalVideoDetails`, `TechnicalImageDetails`, ...)
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
