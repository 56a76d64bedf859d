//! Minimal XML element tree
//!
//! Job extraction only needs element names, the leading text of an element
//! and its children, so that is all the tree keeps. Attributes are checked
//! for well-formedness and then dropped, as are comments, processing
//! instructions and the prolog.

use crate::pipeline::ParseError;
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;

/// An XML element with its leading character data and child elements
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name, including any namespace prefix
    pub name: String,
    /// Character data that appears before the first child element
    pub text: Option<String>,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an element without text or children
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the leading text, or `None` if the element has none
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// First direct child named `name`
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children named `name`, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First descendant named `name` in document order, at any depth
    #[must_use]
    pub fn descendant(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .find_map(|c| if c.name == name { Some(c) } else { c.descendant(name) })
    }

    fn push_text(&mut self, text: &str) {
        if self.children.is_empty() {
            self.text.get_or_insert_with(String::new).push_str(text);
        }
    }
}

/// Parses a document into its root element
///
/// # Errors
///
/// Returns [`ParseError`] when the document is not well-formed: tokenizer
/// errors, malformed or duplicated attributes, mismatched or unclosed tags,
/// a missing or repeated root element, stray text outside the root, or
/// undefined entities.
pub fn parse(xml: &str) -> Result<Element, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            ParseError::new(format!("{e} (at byte {})", reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                if open.is_empty() && root.is_some() {
                    return Err(ParseError::new("junk after document element"));
                }
                open.push(start_element(&e)?);
            }
            Event::Empty(e) => {
                let element = start_element(&e)?;
                attach(element, &mut open, &mut root)?;
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let element = open.pop().ok_or_else(|| {
                    ParseError::new(format!("unexpected closing tag </{name}>"))
                })?;
                if element.name != name {
                    return Err(ParseError::new(format!(
                        "mismatched tag: expected </{}>, found </{name}>",
                        element.name
                    )));
                }
                attach(element, &mut open, &mut root)?;
            }
            Event::Text(e) => {
                // Line endings are normalized before entities are expanded, so
                // `&#13;` still yields a literal carriage return.
                let raw = std::str::from_utf8(&e)
                    .map_err(|err| ParseError::new(format!("invalid UTF-8 in text: {err}")))?;
                let normalized = normalize_newlines(raw);
                let text = unescape(&normalized).map_err(|err| ParseError::new(err.to_string()))?;
                push_text(&text, &mut open)?;
            }
            Event::CData(e) => {
                let raw = std::str::from_utf8(&e)
                    .map_err(|err| ParseError::new(format!("invalid UTF-8 in CDATA: {err}")))?;
                push_text(&normalize_newlines(raw), &mut open)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(ParseError::new(format!(
            "unclosed element <{}>",
            unclosed.name
        )));
    }

    root.ok_or_else(|| ParseError::new("no element found"))
}

fn start_element(start: &BytesStart<'_>) -> Result<Element, ParseError> {
    let qname = start.name();
    let name = std::str::from_utf8(qname.as_ref())
        .map_err(|e| ParseError::new(format!("invalid UTF-8 in tag name: {e}")))?;

    // Attribute values are unused, but a malformed attribute list makes the
    // whole document ill-formed.
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParseError::new(format!("in <{name}>: {e}")))?;
        attr.unescape_value()
            .map_err(|e| ParseError::new(format!("in <{name}>: {e}")))?;
    }
    check_attribute_spacing(name, start.attributes_raw())?;

    Ok(Element::new(name))
}

/// Every quoted attribute value must be followed by whitespace or the end of
/// the tag; the attribute iterator accepts `a="1"b="2"`.
fn check_attribute_spacing(name: &str, raw: &[u8]) -> Result<(), ParseError> {
    let mut quote = None;
    for (i, &b) in raw.iter().enumerate() {
        match quote {
            Some(q) if b == q => {
                quote = None;
                if raw.get(i + 1).is_some_and(|next| !next.is_ascii_whitespace()) {
                    return Err(ParseError::new(format!(
                        "in <{name}>: attributes must be separated by whitespace"
                    )));
                }
            }
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None => {}
        }
    }
    Ok(())
}

/// Applies XML end-of-line handling: `\r\n` and lone `\r` become `\n`.
fn normalize_newlines(raw: &str) -> Cow<'_, str> {
    if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

fn attach(
    element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), ParseError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_some() {
        Err(ParseError::new("junk after document element"))
    } else {
        *root = Some(element);
        Ok(())
    }
}

fn push_text(text: &str, open: &mut [Element]) -> Result<(), ParseError> {
    match open.last_mut() {
        Some(current) => {
            current.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ParseError::new("text outside of the document element")),
    }
}
