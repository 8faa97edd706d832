//! Insignificant-whitespace normalization for inherited documentation

use crate::error::TreeError;
use crate::node::{DocElement, DocNode};
use crate::parse::{parse_fragment, Whitespace};
use crate::write::to_compact_string;

/// Compact raw documentation markup onto a single line
///
/// 1. Every `\r` and `\n` is removed.
/// 2. The text is parsed as a fragment, dropping whitespace-only text nodes;
///    the first element becomes the root.
/// 3. Each remaining text or CDATA node is trimmed, but keeps one boundary whitespace
///    character on a side that had one *and* has a sibling on that side, so
///    `returns <c>true</c> if` keeps its word spacing.
/// 4. The root is serialized compactly.
///
/// # Errors
/// [`TreeError`] when the markup is malformed or has no element.
pub fn normalize_insignificant_whitespace(raw: &str) -> Result<String, TreeError> {
    let flattened: String = raw.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();

    let mut root = parse_fragment(&flattened, Whitespace::Ignore)?
        .into_iter()
        .find_map(|node| match node {
            DocNode::Element(element) => Some(element),
            _ => None,
        })
        .ok_or(TreeError::MissingRoot)?;

    normalize_children(&mut root);
    let compact = to_compact_string(&root);
    tracing::trace!(raw_len = raw.len(), compact_len = compact.len(), "normalized documentation");
    Ok(compact)
}

fn normalize_children(element: &mut DocElement) {
    let children = element.children_mut();
    let count = children.len();

    for (index, child) in children.iter_mut().enumerate() {
        match child {
            DocNode::Text(text) | DocNode::CData(text) => {
                *text = trim_keeping_boundaries(text, index > 0, index + 1 < count);
            }
            DocNode::Element(nested) => normalize_children(nested),
            DocNode::Comment(_) => {}
        }
    }
}

fn trim_keeping_boundaries(value: &str, has_previous: bool, has_next: bool) -> String {
    let (Some(first), Some(last)) = (value.chars().next(), value.chars().next_back()) else {
        return String::new();
    };

    let mut out = String::with_capacity(value.len());
    if first.is_whitespace() && has_previous {
        out.push(first);
    }
    out.push_str(value.trim());
    if last.is_whitespace() && has_next {
        out.push(last);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_indentation_noise() {
        let raw = "<member name=\"M:Foo.Get\">\r\n    <summary>\r\n    Gets the value.\r\n    </summary>\r\n</member>";
        assert_eq!(
            normalize_insignificant_whitespace(raw).unwrap(),
            "<member name=\"M:Foo.Get\"><summary>Gets the value.</summary></member>"
        );
    }

    #[test]
    fn keeps_spacing_around_inline_markup() {
        let raw = "<member>\n  <returns>\n    Returns <c>true</c> if the\n    value is set; otherwise, <c>false</c>.\n  </returns>\n</member>";
        assert_eq!(
            normalize_insignificant_whitespace(raw).unwrap(),
            "<member><returns>Returns <c>true</c> if the    value is set; otherwise, <c>false</c>.</returns></member>"
        );
    }

    #[test]
    fn boundary_kept_only_toward_a_sibling() {
        assert_eq!(trim_keeping_boundaries("  a  ", false, false), "a");
        assert_eq!(trim_keeping_boundaries("  a  ", true, false), " a");
        assert_eq!(trim_keeping_boundaries("  a  ", false, true), "a ");
        assert_eq!(trim_keeping_boundaries("\ta ", true, true), "\ta ");
        assert_eq!(trim_keeping_boundaries("", true, true), "");
    }

    #[test]
    fn malformed_is_an_error() {
        assert!(normalize_insignificant_whitespace("<member><summary></member>").is_err());
        assert_eq!(
            normalize_insignificant_whitespace("plain text"),
            Err(TreeError::MissingRoot)
        );
    }

    #[test]
    fn cdata_survives_as_cdata() {
        let raw = "<member>\n  <example>\n    <code><![CDATA[ if (a < b) return; ]]></code>\n  </example>\n</member>";
        assert_eq!(
            normalize_insignificant_whitespace(raw).unwrap(),
            "<member><example><code><![CDATA[if (a < b) return;]]></code></example></member>"
        );
    }

    #[test]
    fn uses_first_element_only() {
        assert_eq!(
            normalize_insignificant_whitespace("<a>x</a><b>y</b>").unwrap(),
            "<a>x</a>"
        );
    }
}
