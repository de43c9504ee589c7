//! Typed errors for policy-document loading.
//!
//! All failure in the core is expressed as a `ParseError` returned to the
//! caller; nothing here aborts the process or attempts partial recovery.

use thiserror::Error;

/// Why a policy file could not be turned into a `PolicyDocument`.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be opened or read.
    #[error("cannot read policy file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An element carries a malformed attribute list.
    #[error("malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// An element or attribute name is not valid UTF-8.
    #[error("invalid UTF-8 in document: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document contains no root element at all.
    #[error("document contains no root element")]
    Empty,
}
