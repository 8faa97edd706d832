//! Canonical constructors for recurring documentation elements

use crate::node::DocElement;

/// `<see cref="target" />`
#[inline]
#[must_use]
pub fn see(target: &str) -> DocElement {
    DocElement::new("see").with_attribute("cref", target)
}

/// `<param name="name" />`
#[inline]
#[must_use]
pub fn param(name: &str) -> DocElement {
    DocElement::new("param").with_attribute("name", name)
}

/// `<paramref name="name" />`
#[inline]
#[must_use]
pub fn paramref(name: &str) -> DocElement {
    DocElement::new("paramref").with_attribute("name", name)
}

/// `<c>true</c>`
#[inline]
#[must_use]
pub fn true_literal() -> DocElement {
    code("true")
}

/// `<c>false</c>`
#[inline]
#[must_use]
pub fn false_literal() -> DocElement {
    code("false")
}

/// `<c>null</c>`
#[inline]
#[must_use]
pub fn null_literal() -> DocElement {
    code("null")
}

fn code(text: &str) -> DocElement {
    DocElement::new("c").with_child(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_compact_string;

    #[test]
    fn literals() {
        assert_eq!(to_compact_string(&true_literal()), "<c>true</c>");
        assert_eq!(to_compact_string(&false_literal()), "<c>false</c>");
        assert_eq!(to_compact_string(&null_literal()), "<c>null</c>");
    }

    #[test]
    fn references() {
        assert_eq!(see("T:System.String").attribute("cref"), Some("T:System.String"));
        assert_eq!(to_compact_string(&param("count")), "<param name=\"count\" />");
        assert_eq!(to_compact_string(&paramref("count")), "<paramref name=\"count\" />");
    }

    #[test]
    fn param_merges_through_get_or_add() {
        let mut root = DocElement::new("doc");
        root.get_or_add_element_with("param", "name", "count").append("The count.");
        root.get_or_add_element_with("param", "name", "count");
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.element("param"), Some(&param("count").with_child("The count.")));
    }
}
