/*!
 * ERN 4.3 party list: reusable identities referenced from resources and releases.
 */

use serde::{Deserialize, Serialize};

use super::common::ProprietaryId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyList {
    #[serde(rename = "Party", skip_serializing_if = "Vec::is_empty")]
    pub party: Vec<Party>,
}

impl PartyList {
    pub fn contains(&self, reference: &str) -> bool {
        self.party.iter().any(|party| party.party_reference == reference)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party {
    #[serde(rename = "PartyReference")]
    pub party_reference: String,
    #[serde(rename = "PartyId", skip_serializing_if = "Vec::is_empty")]
    pub party_id: Vec<PartyId>,
    #[serde(rename = "PartyName", skip_serializing_if = "Vec::is_empty")]
    pub party_name: Vec<PartyName>,
}

/// Industry identifiers of a party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyId {
    #[serde(rename = "ISNI", skip_serializing_if = "Option::is_none")]
    pub isni: Option<String>,
    #[serde(rename = "DPID", skip_serializing_if = "Option::is_none")]
    pub dpid: Option<String>,
    #[serde(rename = "IpiNameNumber", skip_serializing_if = "Option::is_none")]
    pub ipi_name_number: Option<String>,
    #[serde(rename = "ProprietaryId", skip_serializing_if = "Vec::is_empty")]
    pub proprietary_id: Vec<ProprietaryId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyName {
    #[serde(rename = "FullName")]
    pub full_name: String,
    /// Sort form, e.g. "Beatles, The"
    #[serde(rename = "FullNameIndexed", skip_serializing_if = "Option::is_none")]
    pub full_name_indexed: Option<String>,
}
