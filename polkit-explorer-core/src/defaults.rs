//! Extraction of an action's `<defaults>` block into ordered
//! (tag, value) pairs.

use crate::xml::XmlNode;

/// Pull the (tag, value) pairs out of the first direct `<defaults>` child
/// of an action element.
///
/// A missing block is not an error and yields an empty sequence. Tags are
/// passed through verbatim, unvalidated; duplicates are all emitted in
/// document order. An empty element contributes an empty-string value.
pub fn extract(action: &XmlNode) -> Vec<(String, String)> {
    match action.child("defaults") {
        Some(defaults) => defaults
            .children()
            .iter()
            .map(|child| (child.name().to_string(), child.text().to_string()))
            .collect(),
        None => Vec::new(),
    }
}
