/*!
 * # ddex-ern - DDEX Electronic Release Notification messages
 *
 * A Rust library for building, validating and serializing DDEX ERN
 * `NewReleaseMessage` documents, as delivered to platforms such as YouTube.
 *
 * ## Features
 *
 * - Typed message models for ERN 3.8 (territory-scoped details) and
 *   ERN 4.3 (flat resources with a party list)
 * - Fluent builders for headers, resources, releases and deals
 * - Post-construction validation of mandatory parts and references
 * - Indented XML output with atomic file writes, and XML decoding
 * - UPC/EAN/ISRC/ISWC/DPID checks and ISO 8601 duration helpers
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `ern38`: ERN 3.8 model, builders and validation
 * - `ern43`: ERN 4.3 model, builders and validation
 * - `xml`: quick-xml serialization helpers and the date-time codec
 * - `identifiers`: identifier predicates, durations, generated ids
 * - `app_config`: Message defaults, loadable from JSON
 * - `language_utils`: ISO language code checks for `LanguageAndScriptCode`
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod ern38;
pub mod ern43;
pub mod file_utils;
pub mod identifiers;
pub mod language_utils;
pub mod xml;

// Re-export main types for easier usage
pub use app_config::{MessageConfig, MessageControlType};
pub use errors::{DdexError, Result, ValidationError};
pub use identifiers::{format_duration, parse_duration, validate_ean, validate_isrc, validate_upc};
pub use language_utils::{get_language_name, validate_language_and_script_code};
