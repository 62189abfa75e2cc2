/*!
 * XML rendering and decoding of ERN message trees.
 *
 * Both schema generations describe their documents as serde value types;
 * this module turns them into indented UTF-8 XML with quick-xml and back.
 * Conventions used by the model types:
 * - `@Name` fields become attributes
 * - `$text` fields become character data
 * - `Option`/`Vec` fields are skipped when empty
 */

pub mod datetime;

use std::path::Path;

use log::{debug, info};
use quick_xml::se::Serializer;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::{DdexError, Result};
use crate::file_utils::FileManager;

/// Standard declaration prepended to written documents
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Spaces per nesting level
pub const INDENT_WIDTH: usize = 4;

/// `xmlns:xsi` of both schema generations
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Render a value as indented XML under the given root tag (no declaration)
pub fn to_xml_string<T: Serialize>(value: &T, root: &str) -> Result<String> {
    let mut buffer = String::new();
    let mut serializer = Serializer::with_root(&mut buffer, Some(root))?;
    serializer.indent(' ', INDENT_WIDTH);
    value.serialize(serializer)?;

    debug!("Rendered <{}> as {} bytes of XML", root, buffer.len());
    Ok(buffer)
}

/// Prepend the XML declaration and a line break
pub fn with_declaration(xml: &str) -> String {
    let mut document = String::with_capacity(XML_DECLARATION.len() + 1 + xml.len());
    document.push_str(XML_DECLARATION);
    document.push('\n');
    document.push_str(xml);
    document
}

/// Write `xml` behind the declaration in one atomic replace of `path`
pub fn write_document<P: AsRef<Path>>(path: P, xml: &str) -> Result<()> {
    let path = path.as_ref();
    let document = with_declaration(xml);

    FileManager::write_atomic(path, document.as_bytes()).map_err(|source| DdexError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}

/// Decode an XML document into a value; the declaration is optional
pub fn from_xml_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let text = std::str::from_utf8(bytes)?;
    Ok(quick_xml::de::from_str(text)?)
}
