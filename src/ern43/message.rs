/*!
 * Root of an ERN 4.3 `NewReleaseMessage`.
 */

use serde::{Deserialize, Serialize};

use super::deal::DealList;
use super::header::MessageHeader;
use super::party::PartyList;
use super::release::{Release, ReleaseList};
use super::resource::ResourceList;
use crate::app_config::MessageConfig;
use crate::errors::Result;
use crate::xml::{from_xml_slice, to_xml_string, with_declaration, XSI_NAMESPACE};

pub const ERN_NAMESPACE: &str = "http://ddex.net/xml/ern/43";

pub const SCHEMA_LOCATION: &str =
    "http://ddex.net/xml/ern/43 http://ddex.net/xml/ern/43/release-notification.xsd";

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
    #[serde(rename = "@LanguageAndScriptCode")]
    pub language_and_script_code: String,
    #[serde(rename = "@AvsVersionId", skip_serializing_if = "Option::is_none")]
    pub avs_version_id: Option<String>,
    #[serde(rename = "MessageHeader", skip_serializing_if = "Option::is_none")]
    pub message_header: Option<MessageHeader>,
    #[serde(rename = "PartyList")]
    pub party_list: PartyList,
    #[serde(rename = "ResourceList")]
    pub resource_list: ResourceList,
    #[serde(rename = "ReleaseList")]
    pub release_list: ReleaseList,
    #[serde(rename = "DealList")]
    pub deal_list: DealList,
}

impl NewReleaseMessage {
    /// Empty message with the 4.3 constants and an empty party list
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            xmlns_ern: ERN_NAMESPACE.to_string(),
            xmlns_xsi: XSI_NAMESPACE.to_string(),
            schema_location: SCHEMA_LOCATION.to_string(),
            language_and_script_code: config.language_and_script_code.clone(),
            avs_version_id: config.avs_version_id.clone(),
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

    pub fn main_release(&self) -> Option<&Release> {
        self.release_list.release.first()
    }

    pub fn to_xml(&self) -> Result<String> {
        to_xml_string(self, ROOT_ELEMENT)
    }

    pub fn to_xml_with_declaration(&self) -> Result<String> {
        Ok(with_declaration(&self.to_xml()?))
    }

    pub fn from_xml(bytes: &[u8]) -> Result<Self> {
        from_xml_slice(bytes)
    }
}
