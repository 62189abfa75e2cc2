/*!
 * ERN 4.3 deal list. Use types are listed directly in the deal terms.
 */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealList {
    #[serde(rename = "ReleaseDeal", skip_serializing_if = "Vec::is_empty")]
    pub release_deal: Vec<ReleaseDeal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDeal {
    #[serde(rename = "DealReleaseReference")]
    pub deal_release_reference: String,
    #[serde(rename = "Deal", skip_serializing_if = "Vec::is_empty")]
    pub deal: Vec<Deal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deal {
    #[serde(rename = "DealTerms", skip_serializing_if = "Option::is_none")]
    pub deal_terms: Option<DealTerms>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealTerms {
    #[serde(rename = "TerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub territory_code: Vec<String>,
    #[serde(rename = "ExcludedTerritoryCode", skip_serializing_if = "Vec::is_empty")]
    pub excluded_territory_code: Vec<String>,
    #[serde(rename = "ValidityPeriod", skip_serializing_if = "Vec::is_empty")]
    pub validity_period: Vec<ValidityPeriod>,
    #[serde(rename = "CommercialModelType", skip_serializing_if = "Vec::is_empty")]
    pub commercial_model_type: Vec<String>,
    #[serde(rename = "UseType", skip_serializing_if = "Vec::is_empty")]
    pub use_type: Vec<String>,
    #[serde(rename = "RightsClaimPolicy", skip_serializing_if = "Vec::is_empty")]
    pub rights_claim_policy: Vec<RightsClaimPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityPeriod {
    #[serde(rename = "StartDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "StartDateTime", skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(rename = "EndDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "EndDateTime", skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RightsClaimPolicy {
    #[serde(rename = "RightsClaimPolicyType")]
    pub rights_claim_policy_type: String,
}
