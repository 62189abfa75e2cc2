use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::file_utils::FileManager;

/// Message construction configuration
/// This module holds the defaults a builder stamps onto every new message:
/// language, control type and the version-specific root attributes.
/// It can be loaded from a JSON file; every field has a default.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageConfig {
    /// LanguageAndScriptCode of the root element (e.g. "en", "en-US")
    #[serde(default = "default_language")]
    pub language_and_script_code: String,

    /// MessageControlType stamped by `set_header`
    #[serde(default = "default_control_type")]
    pub message_control_type: Option<MessageControlType>,

    /// ReleaseProfileVersionId of ERN 3.8 messages
    #[serde(default = "default_release_profile")]
    pub release_profile_version_id: Option<String>,

    /// AvsVersionId of ERN 4.3 messages
    #[serde(default)]
    pub avs_version_id: Option<String>,

    /// Territory used when a territory-scoped call has no section in focus (ERN 3.8)
    #[serde(default = "default_territory")]
    pub default_territory: String,
}

/// Whether a message is a test or a production delivery
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(into = "String", try_from = "String")]
pub enum MessageControlType {
    // @control: Test delivery, not to be published
    #[default]
    TestMessage,
    // @control: Production delivery
    LiveMessage,
}

impl MessageControlType {
    // @returns: DDEX allowed-value string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TestMessage => "TestMessage",
            Self::LiveMessage => "LiveMessage",
        }
    }
}

// Implement Display trait for MessageControlType
impl std::fmt::Display for MessageControlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Implement FromStr trait for MessageControlType
impl std::str::FromStr for MessageControlType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "TestMessage" => Ok(Self::TestMessage),
            "LiveMessage" => Ok(Self::LiveMessage),
            _ => Err(anyhow!("Invalid message control type: {}", s)),
        }
    }
}

impl From<MessageControlType> for String {
    fn from(value: MessageControlType) -> Self {
        value.as_str().to_string()
    }
}

impl TryFrom<String> for MessageControlType {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_control_type() -> Option<MessageControlType> {
    Some(MessageControlType::TestMessage)
}

fn default_release_profile() -> Option<String> {
    Some("Video".to_string())
}

fn default_territory() -> String {
    "Worldwide".to_string()
}

impl MessageConfig {
    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        crate::language_utils::validate_language_and_script_code(&self.language_and_script_code)?;

        if self.default_territory.trim().is_empty() {
            return Err(anyhow!("Default territory must not be empty"));
        }

        if let Some(avs) = &self.avs_version_id {
            if avs.trim().is_empty() {
                return Err(anyhow!("AvsVersionId must not be blank when set"));
            }
        }

        Ok(())
    }
}

/// Default implementation for MessageConfig
impl Default for MessageConfig {
    fn default() -> Self {
        MessageConfig {
            language_and_script_code: default_language(),
            message_control_type: default_control_type(),
            release_profile_version_id: default_release_profile(),
            avs_version_id: None,
            default_territory: default_territory(),
        }
    }
}
