/*!
 * Root of an ERN 3.8 `NewReleaseMessage`.
 */

use serde::{Deserialize, Serialize};

use super::common::Title;
use super::deal::DealList;
use super::header::MessageHeader;
use super::release::{Release, ReleaseList};
use super::resource::ResourceList;
use crate::app_config::MessageConfig;
use crate::errors::Result;
use crate::xml::{from_xml_slice, to_xml_string, with_declaration, XSI_NAMESPACE};

/// Namespace of ERN 3.8 (`ern/382`) documents
pub const ERN_NAMESPACE: &str = "http://ddex.net/xml/ern/382";

/// Value of the `MessageSchemaVersionId` attribute
pub const MESSAGE_SCHEMA_VERSION_ID: &str = "ern/382";

pub const SCHEMA_LOCATION: &str =
    "http://ddex.net/xml/ern/382 http://ddex.net/xml/ern/382/release-notification.xsd";

/// Qualified root tag
pub const ROOT_ELEMENT: &str = "ern:NewReleaseMessage";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewReleaseMessage {
    #[serde(rename = "@xmlns:ern")]
    pub xmlns_ern: String,
    #[serde(rename = "@xmlns:xsi")]
    pub xmlns_xsi: String,
    // the decoder reports prefixed attributes by local name
    #[serde(rename = "@xsi:schemaLocation", alias = "@schemaLocation")]
    pub schema_location: String,
    #[serde(rename = "@MessageSchemaVersionId")]
    pub message_schema_version_id: String,
    #[serde(rename = "@ReleaseProfileVersionId", skip_serializing_if = "Option::is_none")]
    pub release_profile_version_id: Option<String>,
    #[serde(rename = "@LanguageAndScriptCode")]
    pub language_and_script_code: String,
    #[serde(rename = "MessageHeader", skip_serializing_if = "Option::is_none")]
    pub message_header: Option<MessageHeader>,
    /// `OriginalMessage` or `UpdateMessage`; deprecated in 3.8
    #[serde(rename = "UpdateIndicator", skip_serializing_if = "Option::is_none")]
    pub update_indicator: Option<String>,
    #[serde(rename = "ResourceList")]
    pub resource_list: ResourceList,
    #[serde(rename = "CollectionList", skip_serializing_if = "Option::is_none")]
    pub collection_list: Option<CollectionList>,
    #[serde(rename = "ReleaseList")]
    pub release_list: ReleaseList,
    #[serde(rename = "DealList")]
    pub deal_list: DealList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionList {
    #[serde(rename = "Collection", skip_serializing_if = "Vec::is_empty")]
    pub collection: Vec<Collection>,
}

/// Playlist or compilation grouping resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    #[serde(rename = "CollectionReference")]
    pub collection_reference: String,
    #[serde(rename = "CollectionType", skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,
    #[serde(rename = "Title", skip_serializing_if = "Vec::is_empty")]
    pub title: Vec<Title>,
    #[serde(rename = "CollectionResourceReferenceList", skip_serializing_if = "Option::is_none")]
    pub collection_resource_reference_list: Option<CollectionResourceReferenceList>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionResourceReferenceList {
    #[serde(rename = "CollectionResourceReference", skip_serializing_if = "Vec::is_empty")]
    pub collection_resource_reference: Vec<String>,
}

impl NewReleaseMessage {
    /// Empty message stamped with the 3.8 constants and the configured root attributes
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            xmlns_ern: ERN_NAMESPACE.to_string(),
            xmlns_xsi: XSI_NAMESPACE.to_string(),
            schema_location: SCHEMA_LOCATION.to_string(),
            message_schema_version_id: MESSAGE_SCHEMA_VERSION_ID.to_string(),
            release_profile_version_id: config.release_profile_version_id.clone(),
            language_and_script_code: config.language_and_script_code.clone(),
            ..Default::default()
        }
    }

    /// All ICPN, GRid and ISRC values, in release order
    pub fn release_ids(&self) -> Vec<String> {
        self.release_list
            .release
            .iter()
            .flat_map(|release| release.release_id.iter())
            .flat_map(|id| id.values())
            .map(str::to_string)
            .collect()
    }

    /// First release of the message, conventionally the main one
    pub fn main_release(&self) -> Option<&Release> {
        self.release_list.release.first()
    }

    /// Indented XML without declaration
    pub fn to_xml(&self) -> Result<String> {
        to_xml_string(self, ROOT_ELEMENT)
    }

    pub fn to_xml_with_declaration(&self) -> Result<String> {
        Ok(with_declaration(&self.to_xml()?))
    }

    /// Decode a document; checks structure only, not the schema
    pub fn from_xml(bytes: &[u8]) -> Result<Self> {
        from_xml_slice(bytes)
    }
}
