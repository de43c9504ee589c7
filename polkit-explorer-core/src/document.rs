//! The policy-document model: loading a PolicyKit action file into an
//! ordered list of `Action` records.

use crate::defaults;
use crate::error::ParseError;
use crate::locale;
use crate::xml::XmlNode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `<description>` (or legacy `<_description>`) element of an action,
/// kept in document order so resolution under another locale stays possible
/// after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionCandidate {
    /// Value of the `xml:lang` attribute, if present.
    pub lang: Option<String>,
    /// True for the legacy `<_description>` spelling.
    pub legacy: bool,
    pub text: String,
}

/// One authorization action from the policy file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Reverse-DNS-style action id. Always non-empty; elements without
    /// one never become records.
    pub id: String,
    /// Description resolved for the locale the document was loaded with.
    pub description: String,
    /// All description candidates, in document order.
    pub descriptions: Vec<DescriptionCandidate>,
    /// Ordered (tag, value) pairs from the `<defaults>` block.
    pub defaults: Vec<(String, String)>,
}

/// An immutable snapshot of one loaded policy file.
///
/// `load` returns a fresh value and never mutates an existing document,
/// so a failed reload leaves the caller's previous document intact;
/// replacing it on success is the caller's atomic swap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    actions: Vec<Action>,
}

impl PolicyDocument {
    /// Load a policy file from disk, resolving descriptions for `locale`.
    ///
    /// The file is read as UTF-8. Unreadable files and malformed XML
    /// propagate as `ParseError` unmodified.
    pub fn load(path: impl AsRef<Path>, locale: &str) -> Result<PolicyDocument, ParseError> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path)?;
        let doc = Self::from_xml(&xml, locale)?;
        tracing::debug!(
            path = %path.display(),
            actions = doc.actions.len(),
            "policy document loaded"
        );
        Ok(doc)
    }

    /// Same pipeline as [`PolicyDocument::load`], but from an in-memory
    /// document.
    pub fn from_xml(xml: &str, locale: &str) -> Result<PolicyDocument, ParseError> {
        let root = XmlNode::parse(xml)?;
        let mut actions = Vec::new();

        // Depth-first over the whole tree: actions may sit inside grouping
        // elements, not just directly under <policyconfig>.
        for node in root.descendants().filter(|n| n.name() == "action") {
            let id = match node.attr("id") {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => {
                    tracing::debug!("skipping <action> without id attribute");
                    continue;
                }
            };
            let descriptions = collect_descriptions(node);
            let description = locale::resolve(&descriptions, locale);
            let defaults = defaults::extract(node);
            actions.push(Action {
                id,
                description,
                descriptions,
                defaults,
            });
        }

        Ok(PolicyDocument { actions })
    }

    /// Actions in document order. Duplicate ids are possible and kept.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Action ids in document order, for the tree/filter pane.
    pub fn action_ids(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

fn collect_descriptions(action: &XmlNode) -> Vec<DescriptionCandidate> {
    action
        .children()
        .iter()
        .filter_map(|child| {
            let legacy = match child.name() {
                "description" => false,
                "_description" => true,
                _ => return None,
            };
            Some(DescriptionCandidate {
                lang: child.attr("xml:lang").map(str::to_string),
                legacy,
                text: child.text().to_string(),
            })
        })
        .collect()
}
