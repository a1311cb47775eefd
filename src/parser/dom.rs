//! # Mutable XML DOM
//!
//! A small owned tree over `quick-xml` events, just deep enough for the
//! transform pass: ordered attributes, ordered children, and removal mediated
//! by the parent. Tag names are kept exactly as written in the source;
//! namespace handling compares local-name suffixes only, so `svg:rect` and
//! `rect` are the same shape.

use crate::error::{Result, SvgError};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

/// A child slot in the element tree
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    /// Nested element
    Element(Element),
    /// Character data (stored unescaped, re-escaped on write)
    Text(String),
    /// CDATA section (written back verbatim)
    CData(String),
    /// Comment (written back verbatim)
    Comment(String),
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Qualified tag name as written in the source (`rect`, `svg:rect`, ...)
    pub name: String,
    /// Attributes in document order as (name, unescaped value) pairs
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<XmlNode>,
}

impl Element {
    /// Create an empty element with the given tag name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Local part of the tag name, ignoring any namespace prefix
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    /// Look up an attribute value by exact name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing an existing value or appending a new pair
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(slot) = self
            .attributes
            .iter_mut()
            .find(|(key, _)| key.as_str() == name)
        {
            slot.1 = value.to_string();
        } else {
            self.attributes.push((name.to_string(), value.to_string()));
        }
    }

    /// Concatenated text content of direct Text/CData children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                XmlNode::Text(t) | XmlNode::CData(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Iterate over direct child elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(e) => Some(e),
            _ => None,
        })
    }
}

/// Parse a full XML document into its root element
///
/// Comments and character data inside the root are preserved; anything outside
/// it (prolog whitespace, doctype, processing instructions) is dropped.
///
/// # Errors
/// * [`SvgError::Xml`] - Malformed markup (mismatched or unclosed tags, bad syntax)
/// * [`SvgError::MissingRoot`] - No element at all in the input
/// * [`SvgError::TrailingContent`] - A second root element follows the first
pub fn parse_document(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(SvgError::TrailingContent(qname_to_string(
                        start.name().as_ref(),
                    )));
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(XmlNode::Element(element));
                } else if root.is_none() {
                    root = Some(element);
                } else {
                    return Err(SvgError::TrailingContent(qname_to_string(
                        start.name().as_ref(),
                    )));
                }
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    SvgError::UnexpectedClosingTag(qname_to_string(end.name().as_ref()))
                })?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(XmlNode::Element(element));
                } else {
                    root = Some(element);
                }
            }
            Event::Text(text) => {
                if let Some(parent) = stack.last_mut() {
                    let unescaped = text.unescape()?;
                    parent.children.push(XmlNode::Text(unescaped.into_owned()));
                }
            }
            Event::CData(cdata) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                    parent.children.push(XmlNode::CData(raw));
                }
            }
            Event::Comment(comment) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(&comment.into_inner()).into_owned();
                    parent.children.push(XmlNode::Comment(raw));
                }
            }
            Event::Eof => {
                if let Some(unclosed) = stack.pop() {
                    return Err(SvgError::UnclosedTag(unclosed.name));
                }
                break;
            }
            // Declaration, doctype and processing instructions are not carried
            // through; the writer emits a fresh declaration of its own.
            _ => {}
        }
    }

    root.ok_or(SvgError::MissingRoot)
}

/// Serialize a document to bytes with an XML declaration header (UTF-8)
pub fn write_document(root: &Element) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;
    Ok(writer.into_inner())
}

/// Build an owned element from a start tag's name and attributes
fn element_from_start(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(&qname_to_string(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = qname_to_string(attribute.key.as_ref());
        let value = attribute.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn qname_to_string(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            XmlNode::Element(e) => write_element(writer, e)?,
            XmlNode::Text(t) => writer.write_event(Event::Text(BytesText::new(t.as_str())))?,
            XmlNode::CData(t) => writer.write_event(Event::CData(BytesCData::new(t.as_str())))?,
            XmlNode::Comment(t) => {
                writer.write_event(Event::Comment(BytesText::from_escaped(t.as_str())))?;
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
