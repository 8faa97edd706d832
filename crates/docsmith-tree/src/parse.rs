//! Markup fragment parsing
//!
//! Reads documentation markup (which may contain several top-level nodes)
//! into [`DocNode`]s using `quick-xml`.

use crate::error::TreeError;
use crate::node::{DocElement, DocNode};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Whitespace-only text node handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whitespace {
    /// Keep every text node
    Preserve,

    /// Drop text nodes consisting only of whitespace
    #[default]
    Ignore,
}

/// Parse a markup fragment into nodes
///
/// Declarations, processing instructions and doctypes are skipped. CDATA
/// sections become [`DocNode::CData`]; adjacent text is merged into one node.
///
/// # Errors
/// [`TreeError::Malformed`] on any syntax error, mismatched or unclosed tag,
/// or unknown entity.
pub fn parse_fragment(text: &str, whitespace: Whitespace) -> Result<Vec<DocNode>, TreeError> {
    let mut reader = Reader::from_str(text);
    let mut top = Vec::new();
    let mut open: Vec<DocElement> = Vec::new();

    loop {
        match reader.read_event().map_err(TreeError::malformed)? {
            Event::Start(start) => open.push(element_from(&start)?),
            Event::Empty(start) => {
                let element = element_from(&start)?;
                push_node(&mut open, &mut top, element.into());
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| TreeError::malformed("unbalanced end tag"))?;
                push_node(&mut open, &mut top, element.into());
            }
            Event::Text(text) => {
                let value = text.unescape().map_err(TreeError::malformed)?;
                if whitespace == Whitespace::Ignore && value.chars().all(char::is_whitespace) {
                    continue;
                }
                push_text(&mut open, &mut top, &value);
            }
            Event::CData(data) => {
                let value = std::str::from_utf8(&data).map_err(TreeError::malformed)?;
                push_node(&mut open, &mut top, DocNode::CData(value.to_string()));
            }
            Event::Comment(comment) => {
                let value = std::str::from_utf8(&comment).map_err(TreeError::malformed)?;
                push_node(&mut open, &mut top, DocNode::Comment(value.to_string()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(TreeError::malformed(format!(
            "unclosed element <{}>",
            unclosed.name()
        )));
    }

    Ok(top)
}

fn element_from(start: &BytesStart<'_>) -> Result<DocElement, TreeError> {
    let qname = start.name();
    let name = std::str::from_utf8(qname.as_ref()).map_err(TreeError::malformed)?;
    let mut element = DocElement::new(name);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(TreeError::malformed)?;
        let key = std::str::from_utf8(attribute.key.as_ref()).map_err(TreeError::malformed)?;
        let value = attribute.unescape_value().map_err(TreeError::malformed)?;
        element.set_attribute(key, value.into_owned());
    }

    Ok(element)
}

fn push_node(open: &mut [DocElement], top: &mut Vec<DocNode>, node: DocNode) {
    match open.last_mut() {
        Some(parent) => parent.append(node),
        None => top.push(node),
    }
}

fn push_text(open: &mut [DocElement], top: &mut Vec<DocNode>, value: &str) {
    let siblings = match open.last_mut() {
        Some(parent) => parent.children_mut(),
        None => top,
    };
    match siblings.last_mut() {
        Some(DocNode::Text(previous)) => previous.push_str(value),
        _ => siblings.push(DocNode::Text(value.to_string())),
    }
}
