//! Documentation node model
//!
//! Provides [`DocTree`], [`DocElement`] and [`DocNode`].

use crate::error::TreeError;
use crate::parse::{parse_fragment, Whitespace};
use indexmap::IndexMap;

/// Name of the container element used when a declaration has no documentation
pub const SYNTHETIC_ROOT: &str = "doc";

/// A single node in a documentation tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    /// Named element with attributes and children
    Element(DocElement),

    /// Character data (already unescaped)
    Text(String),

    /// CDATA section, kept distinct from text so it is written back as CDATA
    CData(String),

    /// Markup comment
    Comment(String),
}

impl DocNode {
    /// Element view of this node
    #[inline]
    #[must_use]
    pub fn as_element(&self) -> Option<&DocElement> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutable element view of this node
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut DocElement> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Character data of a text or CDATA node
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::CData(text) => Some(text),
            _ => None,
        }
    }

    /// Check if this is an element named `name`
    #[inline]
    #[must_use]
    pub fn is_element_named(&self, name: &str) -> bool {
        self.as_element().is_some_and(|e| e.name == name)
    }
}

impl From<DocElement> for DocNode {
    fn from(element: DocElement) -> Self {
        Self::Element(element)
    }
}

impl From<String> for DocNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for DocNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Documentation element
///
/// Element identity for merging is its name, optionally narrowed by one
/// attribute value (see [`DocElement::get_or_add_element_with`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocElement {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<DocNode>,
}

impl DocElement {
    /// Create empty element
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set attribute
    #[inline]
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder: append child node
    #[inline]
    #[must_use]
    pub fn with_child(mut self, node: impl Into<DocNode>) -> Self {
        self.append(node);
        self
    }

    /// Element name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value by name
    #[inline]
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set or replace an attribute, keeping its original position
    #[inline]
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Child nodes in document order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[DocNode] {
        &self.children
    }

    /// Mutable child nodes
    #[inline]
    pub fn children_mut(&mut self) -> &mut Vec<DocNode> {
        &mut self.children
    }

    /// Detach and return all child nodes
    #[inline]
    pub fn take_children(&mut self) -> Vec<DocNode> {
        std::mem::take(&mut self.children)
    }

    /// True when the element has no child nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append child node
    #[inline]
    pub fn append(&mut self, node: impl Into<DocNode>) {
        self.children.push(node.into());
    }

    /// Child elements in document order
    pub fn elements(&self) -> impl Iterator<Item = &DocElement> {
        self.children.iter().filter_map(DocNode::as_element)
    }

    /// Child elements named `name`
    ///
    /// The iterator borrows `name`; the yielded elements only borrow `self`.
    pub fn elements_named<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a DocElement> + 'n
    where
        'a: 'n,
    {
        self.elements().filter(move |e| e.name == name)
    }

    /// Mutable child elements named `name`
    pub fn elements_named_mut<'a, 'n>(
        &'a mut self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a mut DocElement> + 'n
    where
        'a: 'n,
    {
        self.children
            .iter_mut()
            .filter_map(DocNode::as_element_mut)
            .filter(move |e| e.name == name)
    }

    /// First child element named `name`
    #[inline]
    #[must_use]
    pub fn element(&self, name: &str) -> Option<&DocElement> {
        self.elements().find(|e| e.name == name)
    }

    /// Remove the first child element named `name`
    pub fn remove_element(&mut self, name: &str) -> Option<DocElement> {
        let index = self.children.iter().position(|n| n.is_element_named(name))?;
        match self.children.remove(index) {
            DocNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of all descendant text and CDATA nodes (comments excluded)
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            if let Some(text) = child.as_text() {
                out.push_str(text);
            } else if let Some(element) = child.as_element() {
                element.collect_text(out);
            }
        }
    }

    /// Return the first child element named `name`, creating and appending
    /// it when absent
    pub fn get_or_add_element(&mut self, name: &str) -> &mut DocElement {
        let found = self.children.iter().position(|n| n.is_element_named(name));
        self.element_at_or_push(found, || DocElement::new(name))
    }

    /// Return the first child element named `name` whose `attribute` equals
    /// `value`, creating and appending it when absent
    pub fn get_or_add_element_with(
        &mut self,
        name: &str,
        attribute: &str,
        value: &str,
    ) -> &mut DocElement {
        let found = self.children.iter().position(|n| {
            n.as_element()
                .is_some_and(|e| e.name == name && e.attribute(attribute) == Some(value))
        });
        self.element_at_or_push(found, || DocElement::new(name).with_attribute(attribute, value))
    }

    fn element_at_or_push(
        &mut self,
        found: Option<usize>,
        create: impl FnOnce() -> DocElement,
    ) -> &mut DocElement {
        let index = found.unwrap_or_else(|| {
            self.children.push(DocNode::Element(create()));
            self.children.len() - 1
        });
        match &mut self.children[index] {
            DocNode::Element(element) => element,
            _ => unreachable!("index always points at an element"),
        }
    }
}

/// Documentation of one declaration
///
/// The root is either the element parsed from existing documentation or a
/// synthetic [`SYNTHETIC_ROOT`] container. Only the root's children are ever
/// written back to source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTree {
    root: DocElement,
}

impl DocTree {
    /// Empty tree with a synthetic root
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: DocElement::new(SYNTHETIC_ROOT),
        }
    }

    /// Wrap an existing root element
    #[inline]
    #[must_use]
    pub fn from_root(root: DocElement) -> Self {
        Self { root }
    }

    /// Parse a declaration's existing documentation
    ///
    /// Blank text yields [`DocTree::empty`]. Otherwise the text must contain
    /// exactly one root element (comments may surround it); whitespace-only
    /// text nodes are discarded.
    ///
    /// # Errors
    /// [`TreeError`] when the markup is malformed or has no single root.
    pub fn parse(text: &str) -> Result<Self, TreeError> {
        if text.trim().is_empty() {
            return Ok(Self::empty());
        }

        let mut root = None;
        for node in parse_fragment(text, Whitespace::Ignore)? {
            match node {
                DocNode::Element(element) if root.is_none() => root = Some(element),
                DocNode::Element(element) => {
                    return Err(TreeError::malformed(format!(
                        "unexpected second root element <{}>",
                        element.name
                    )))
                }
                DocNode::Text(_) | DocNode::CData(_) => {
                    return Err(TreeError::malformed("text outside the root element"))
                }
                DocNode::Comment(_) => {}
            }
        }

        root.map(Self::from_root).ok_or(TreeError::MissingRoot)
    }

    /// Root element
    #[inline]
    #[must_use]
    pub fn root(&self) -> &DocElement {
        &self.root
    }

    /// Mutable root element
    #[inline]
    pub fn root_mut(&mut self) -> &mut DocElement {
        &mut self.root
    }

    /// True when the root has no children
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Root's child nodes
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[DocNode] {
        self.root.children()
    }
}

impl Default for DocTree {
    fn default() -> Self {
        Self::empty()
    }
}
