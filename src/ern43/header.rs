/*!
 * ERN 4.3 message header.
 */

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::party::PartyName;
use crate::app_config::MessageControlType;

/// Sender or recipient; identified by a plain DPID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingParty {
    #[serde(rename = "PartyId")]
    pub party_id: String,
    #[serde(rename = "PartyName", skip_serializing_if = "Option::is_none")]
    pub party_name: Option<PartyName>,
    #[serde(rename = "TradingName", skip_serializing_if = "Option::is_none")]
    pub trading_name: Option<String>,
}

impl MessagingParty {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            party_id: id.to_string(),
            party_name: Some(PartyName { full_name: name.to_string(), full_name_indexed: None }),
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
    #[serde(rename = "MessageControlType", skip_serializing_if = "Option::is_none")]
    pub message_control_type: Option<MessageControlType>,
}
