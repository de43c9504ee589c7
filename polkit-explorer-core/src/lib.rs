//! polkit-explorer-core: policy-document model for PolicyKit action files
//!
//! Pure viewer logic with no UI dependencies:
//! - Owned XML element tree built over a quick-xml pull reader
//! - `PolicyDocument` loader collecting `<action>` records in document order
//! - Locale-fallback resolution of localized description text
//! - Defaults extraction into ordered (tag, value) pairs
//! - Case-insensitive substring filter over action ids
//! - Static tag/value explanation tables for the detail pane
//! - Recent-files list over an injected settings store
//!
//! The presentation layer (terminal or otherwise) lives in
//! `polkit-explorer-cli`; nothing in this crate touches stdout or
//! process-global state.

pub mod defaults;
pub mod document;
pub mod error;
pub mod explain;
pub mod filter;
pub mod locale;
pub mod recent;
pub mod xml;

// Re-export commonly used types
pub use document::{Action, DescriptionCandidate, PolicyDocument};
pub use error::ParseError;
pub use explain::Explanations;
pub use recent::{JsonFileStore, MemoryStore, RecentFiles, SettingsStore};
pub use xml::XmlNode;

/// Sentinel shown when an action carries no usable description, and by
/// the explanation tables when a tag or value is unknown.
pub const NO_DESCRIPTION: &str = "no description available";
