//! Owned XML element tree with typed accessors.
//!
//! The loader never queries the quick-xml reader directly; it assembles the
//! whole document into `XmlNode`s up front so the rest of the crate can use
//! plain accessors (name, attribute lookup, ordered children, text) instead
//! of find-or-default lookups scattered through the logic.

use crate::error::ParseError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One element of a parsed XML document.
///
/// Attributes and children keep document order. Text content is the
/// concatenation of all text and CDATA sections directly inside the
/// element, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<XmlNode>,
    text: String,
}

impl XmlNode {
    /// Parse a UTF-8 XML document and return its root element.
    ///
    /// Fails with `ParseError` on malformed XML (including mismatched end
    /// tags) or when the document has no root element. Comments,
    /// processing instructions, and the XML declaration are ignored.
    pub fn parse(xml: &str) -> Result<XmlNode, ParseError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(element(&e)?),
                Event::Empty(e) => {
                    let node = element(&e)?;
                    attach(&mut stack, &mut root, node);
                }
                Event::End(_) => {
                    // quick-xml checks end-tag matching, so the stack is
                    // never empty here on well-formed input.
                    if let Some(node) = stack.pop() {
                        attach(&mut stack, &mut root, node);
                    }
                }
                Event::Text(t) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&t.unescape()?);
                    }
                }
                Event::CData(t) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(std::str::from_utf8(&t)?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        root.ok_or(ParseError::Empty)
    }

    /// Element name (without any namespace resolution).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute by its literal name, e.g. `"xml:lang"`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct child elements in document order.
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// First direct child element with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text content, empty string when the element has none.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Depth-first pre-order walk over this element and every element
    /// below it, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator returned by [`XmlNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a XmlNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlNode;

    fn next(&mut self) -> Option<&'a XmlNode> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

fn element(e: &BytesStart) -> Result<XmlNode, ParseError> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        attrs.push((key, value));
    }
    Ok(XmlNode {
        name,
        attrs,
        children: Vec::new(),
        text: String::new(),
    })
}

/// Hand a completed element to its parent, or make it the document root.
fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Root element, nesting, attributes, and text all survive parsing.
    #[test]
    fn parses_nested_elements() {
        let root = XmlNode::parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <policyconfig>
              <action id="org.example.run">
                <description>Run things</description>
              </action>
            </policyconfig>"#,
        )
        .unwrap();

        assert_eq!(root.name(), "policyconfig");
        let action = root.child("action").unwrap();
        assert_eq!(action.attr("id"), Some("org.example.run"));
        assert_eq!(action.child("description").unwrap().text(), "Run things");
    }

    /// Self-closing elements become childless nodes with empty text.
    #[test]
    fn parses_empty_elements() {
        let root = XmlNode::parse(r#"<a><b x="1"/></a>"#).unwrap();
        let b = root.child("b").unwrap();
        assert_eq!(b.attr("x"), Some("1"));
        assert_eq!(b.text(), "");
        assert!(b.children().is_empty());
    }

    /// Entity references in text and attributes are unescaped.
    #[test]
    fn unescapes_entities() {
        let root = XmlNode::parse(r#"<a t="x &amp; y">1 &lt; 2</a>"#).unwrap();
        assert_eq!(root.attr("t"), Some("x & y"));
        assert_eq!(root.text(), "1 < 2");
    }

    /// Mismatched end tags are a hard error, not best-effort recovery.
    #[test]
    fn rejects_mismatched_tags() {
        let err = XmlNode::parse("<a><b></a>").unwrap_err();
        assert!(matches!(err, ParseError::Xml(_)));
    }

    /// A document with no element at all fails with `Empty`.
    #[test]
    fn rejects_empty_document() {
        let err = XmlNode::parse("  \n  ").unwrap_err();
        assert!(matches!(err, ParseError::Empty));
    }

    /// Descendants walk is depth-first in document order.
    #[test]
    fn descendants_are_preorder() {
        let root = XmlNode::parse("<a><b><c/></b><d/></a>").unwrap();
        let names: Vec<&str> = root.descendants().map(|n| n.name()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }
}
