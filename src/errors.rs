/*!
 * Error types for the ddex-ern crate.
 *
 * This module contains the error taxonomy for serialization, file output,
 * configuration and post-construction validation of ERN messages,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by `validate` on an ERN message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The message has no header at all
    #[error("MessageHeader is required")]
    MissingHeader,

    #[error("MessageHeader.MessageId is required")]
    MissingMessageId,

    #[error("MessageHeader.MessageThreadId is required")]
    MissingThreadId,

    #[error("MessageHeader.MessageSender is required")]
    MissingSender,

    #[error("MessageHeader.MessageRecipient is required")]
    MissingRecipient,

    /// The release list is empty
    #[error("at least one Release is required")]
    NoReleases,

    /// The deal list is empty; carries the first release left without terms
    #[error("at least one Deal is required (release {0} has none)")]
    NoDeals(String),

    /// A release is not covered by any release deal
    #[error("no deal found for release reference: {0}")]
    NoDealForRelease(String),

    /// A release deal points at a release that does not exist
    #[error("deal references unknown release: {0}")]
    UnknownRelease(String),

    /// A resource group content item points at a resource that does not exist
    #[error("release {release} references unknown resource: {resource}")]
    UnknownResource {
        /// Reference of the release holding the resource group
        release: String,
        /// The dangling resource reference
        resource: String,
    },

    /// A territory section lists both or neither of included and excluded codes
    #[error("{owner} has an invalid territory section: {reason}")]
    InvalidTerritoryScope {
        /// Reference of the resource or release owning the section
        owner: String,
        /// What is wrong with the section
        reason: String,
    },

    /// A party reference does not resolve against the party list
    #[error("{owner} references unknown party: {party}")]
    UnknownParty {
        /// Reference of the entity using the party
        owner: String,
        /// The dangling party reference
        party: String,
    },
}

/// Main error type that wraps all other errors
#[derive(Error, Debug)]
pub enum DdexError {
    /// The message tree could not be rendered as XML
    #[error("failed to marshal XML: {0}")]
    Marshal(#[from] quick_xml::SeError),

    /// An XML document could not be decoded into a message
    #[error("failed to unmarshal XML: {0}")]
    Unmarshal(#[from] quick_xml::DeError),

    /// Input bytes were not valid UTF-8
    #[error("failed to unmarshal XML: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Writing the rendered document failed
    #[error("failed to write file {path:?}: {source}")]
    Write {
        /// Target path of the write
        path: PathBuf,
        /// Underlying error
        #[source]
        source: anyhow::Error,
    },

    /// Post-construction validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Invalid builder configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, DdexError>;

impl From<anyhow::Error> for DdexError {
    fn from(error: anyhow::Error) -> Self {
        Self::Config(error.to_string())
    }
}
