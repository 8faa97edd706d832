//! Markup output
//!
//! Two renditions of the same nodes:
//! - compact: one line, no added whitespace (used for cached inherited text)
//! - indented: one line per structural node (used for source rendering)

use crate::node::{DocElement, DocNode};
use quick_xml::escape::{escape, partial_escape};

/// Serialize an element on a single line without added whitespace
#[must_use]
pub fn to_compact_string(element: &DocElement) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Append the compact form of `node` to `out`
pub fn write_compact(node: &DocNode, out: &mut String) {
    match node {
        DocNode::Element(element) => write_element(element, out),
        DocNode::Text(text) => out.push_str(&partial_escape(text.as_str())),
        DocNode::CData(data) => {
            out.push_str("<![CDATA[");
            out.push_str(data);
            out.push_str("]]>");
        }
        DocNode::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
    }
}

fn write_element(element: &DocElement, out: &mut String) {
    write_open(element, out);
    if element.is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');
    for child in element.children() {
        write_compact(child, out);
    }
    write_close(element, out);
}

fn write_open(element: &DocElement, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
}

fn write_close(element: &DocElement, out: &mut String) {
    out.push_str("</");
    out.push_str(element.name());
    out.push('>');
}

/// Render nodes as indented lines
///
/// Elements whose children are all elements or comments are expanded, one
/// child per line at one more `indent_unit`; any element holding text or CDATA is
/// written inline so that prose keeps its exact spacing. Line breaks inside
/// text are kept, so a returned entry may span several physical lines.
#[must_use]
pub fn render_lines(nodes: &[DocNode], indent_unit: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for node in nodes {
        render_node(node, 0, indent_unit, &mut lines);
    }
    lines
}

fn render_node(node: &DocNode, depth: usize, indent_unit: &str, lines: &mut Vec<String>) {
    let mut line = indent_unit.repeat(depth);

    let DocNode::Element(element) = node else {
        write_compact(node, &mut line);
        lines.push(line);
        return;
    };

    let expand = !element.is_empty()
        && element
            .children()
            .iter()
            .all(|child| child.as_text().is_none());

    if !expand {
        write_element(element, &mut line);
        lines.push(line);
        return;
    }

    write_open(element, &mut line);
    line.push('>');
    lines.push(line);

    for child in element.children() {
        render_node(child, depth + 1, indent_unit, lines);
    }

    let mut close = indent_unit.repeat(depth);
    write_close(element, &mut close);
    lines.push(close);
}
