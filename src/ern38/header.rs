/*!
 * ERN 3.8 message header: identity of the exchange and its parties.
 */

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::common::{Name, PartyId};
use crate::app_config::MessageControlType;

/// Sender, recipient or on-behalf-of party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingParty {
    #[serde(rename = "PartyId", skip_serializing_if = "Vec::is_empty")]
    pub party_id: Vec<PartyId>,
    #[serde(rename = "PartyName", skip_serializing_if = "Vec::is_empty")]
    pub party_name: Vec<Name>,
    #[serde(rename = "TradingName", skip_serializing_if = "Option::is_none")]
    pub trading_name: Option<String>,
}

impl MessagingParty {
    /// Party identified by one DPID and one name
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            party_id: vec![PartyId::new(id)],
            party_name: vec![Name::new(name)],
            trading_name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageAuditTrailEvent {
    #[serde(rename = "MessagingPartyReference")]
    pub messaging_party_reference: String,
    #[serde(
        rename = "MessageAuditTrailEventDateTime",
        with = "crate::xml::datetime::rfc3339_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "MessageAuditTrailEventTypeCode")]
    pub event_type_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageAuditTrail {
    #[serde(rename = "MessageAuditTrailEvent", skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<MessageAuditTrailEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageHeader {
    #[serde(rename = "MessageThreadId")]
    pub message_thread_id: String,
    #[serde(rename = "MessageId")]
    pub message_id: String,
    #[serde(rename = "MessageFileName", skip_serializing_if = "Option::is_none")]
    pub message_file_name: Option<String>,
    #[serde(rename = "MessageSender", skip_serializing_if = "Option::is_none")]
    pub message_sender: Option<MessagingParty>,
    #[serde(rename = "SentOnBehalfOf", skip_serializing_if = "Option::is_none")]
    pub sent_on_behalf_of: Option<MessagingParty>,
    #[serde(rename = "MessageRecipient", skip_serializing_if = "Vec::is_empty")]
    pub message_recipient: Vec<MessagingParty>,
    #[serde(
        rename = "MessageCreatedDateTime",
        with = "crate::xml::datetime::rfc3339_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_created_date_time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "MessageAuditTrail", skip_serializing_if = "Option::is_none")]
    pub message_audit_trail: Option<MessageAuditTrail>,
    #[serde(rename = "Comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "MessageControlType", skip_serializing_if = "Option::is_none")]
    pub message_control_type: Option<MessageControlType>,
}
