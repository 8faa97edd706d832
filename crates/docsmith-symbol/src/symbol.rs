//! Symbol model
//!
//! [`SymbolData`] is the stored metadata of one declaration; [`Symbol`] is the
//! lightweight view handed out by a [`crate::SymbolService`].

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Opaque symbol handle within one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    /// Create id from raw index
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw index
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl Display for SymbolId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// Method, constructor or operator
    Method,

    /// Property or indexer
    Property,

    /// Event
    Event,

    /// Class, struct, interface, enum or delegate
    Type,
}

impl SymbolKind {
    /// Kinds that can override or implement another member
    #[inline]
    #[must_use]
    pub fn is_member(self) -> bool {
        matches!(self, Self::Method | Self::Property | Self::Event)
    }
}

/// Well-known types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialType {
    /// Ordinary declaration
    #[default]
    None,

    /// Universal root type (no declared base)
    Object,
}

/// Interface member → implementing member, recorded on the implementing type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceMapping {
    /// Member declared on the interface
    pub interface_member: SymbolId,

    /// Member of the implementing type that satisfies it
    pub implementation: SymbolId,
}

fn default_true() -> bool {
    true
}

/// Stored metadata of one declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolData {
    /// Declaration kind
    pub kind: SymbolKind,

    /// Simple name
    pub name: String,

    /// Namespace of a top-level type
    #[serde(default)]
    pub namespace: Option<String>,

    /// Enclosing type
    #[serde(default)]
    pub containing_type: Option<SymbolId>,

    /// Member this one overrides
    #[serde(default)]
    pub overridden_member: Option<SymbolId>,

    /// Interface members implemented explicitly, in declaration order
    #[serde(default)]
    pub explicit_interface_implementations: IndexSet<SymbolId>,

    /// Base type (types only)
    #[serde(default)]
    pub base_type: Option<SymbolId>,

    /// Declared with an `override` modifier
    #[serde(default)]
    pub is_override: bool,

    /// Unconstructed original definition (false for constructed generics)
    #[serde(default = "default_true")]
    pub is_definition: bool,

    /// Well-known type marker
    #[serde(default)]
    pub special: SpecialType,

    /// Every interface the type implements, in enumeration order (types only)
    #[serde(default)]
    pub interfaces: Vec<SymbolId>,

    /// Members in declaration order (types only)
    #[serde(default)]
    pub members: Vec<SymbolId>,

    /// Interface implementation map (types only)
    #[serde(default)]
    pub implementations: Vec<InterfaceMapping>,

    /// Type parameter names
    #[serde(default)]
    pub type_parameters: Vec<String>,

    /// Parameter type names (methods only)
    #[serde(default)]
    pub parameters: Vec<String>,

    /// Raw documentation markup with includes expanded
    #[serde(default)]
    pub documentation: Option<String>,
}

impl SymbolData {
    /// Create metadata with no relationships
    #[must_use]
    pub fn new(kind: SymbolKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            namespace: None,
            containing_type: None,
            overridden_member: None,
            explicit_interface_implementations: IndexSet::new(),
            base_type: None,
            is_override: false,
            is_definition: true,
            special: SpecialType::None,
            interfaces: Vec::new(),
            members: Vec::new(),
            implementations: Vec::new(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            documentation: None,
        }
    }

    /// Set namespace
    #[inline]
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Mark as overriding `member`
    #[inline]
    #[must_use]
    pub fn with_overridden_member(mut self, member: SymbolId) -> Self {
        self.overridden_member = Some(member);
        self.is_override = true;
        self
    }

    /// Add explicit interface implementation
    #[inline]
    #[must_use]
    pub fn with_explicit_implementation(mut self, member: SymbolId) -> Self {
        self.explicit_interface_implementations.insert(member);
        self
    }

    /// Set override flag without an overridden member
    #[inline]
    #[must_use]
    pub fn with_override_flag(mut self, is_override: bool) -> Self {
        self.is_override = is_override;
        self
    }

    /// Set base type
    #[inline]
    #[must_use]
    pub fn with_base_type(mut self, base: SymbolId) -> Self {
        self.base_type = Some(base);
        self
    }

    /// Mark as a constructed (non-definition) type
    #[inline]
    #[must_use]
    pub fn constructed(mut self) -> Self {
        self.is_definition = false;
        self
    }

    /// Set special type marker
    #[inline]
    #[must_use]
    pub fn with_special(mut self, special: SpecialType) -> Self {
        self.special = special;
        self
    }

    /// Add implemented interface
    #[inline]
    #[must_use]
    pub fn with_interface(mut self, interface: SymbolId) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Set type parameters
    #[must_use]
    pub fn with_type_parameters<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_parameters = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set parameter types
    #[must_use]
    pub fn with_parameters<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set documentation markup
    #[inline]
    #[must_use]
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }
}

/// Symbol view used by the documentation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Handle in the snapshot that produced this view
    pub id: SymbolId,

    /// Declaration kind
    pub kind: SymbolKind,

    /// Simple name
    pub name: String,

    /// Enclosing type
    pub containing_type: Option<SymbolId>,

    /// Base type (types only)
    pub base_type: Option<SymbolId>,

    /// Declared with an `override` modifier
    pub is_override: bool,

    /// Unconstructed original definition
    pub is_definition: bool,

    /// Well-known type marker
    pub special: SpecialType,
}

impl Symbol {
    /// Build the view for `id` from stored metadata
    #[must_use]
    pub fn from_data(id: SymbolId, data: &SymbolData) -> Self {
        Self {
            id,
            kind: data.kind,
            name: data.name.clone(),
            containing_type: data.containing_type,
            base_type: data.base_type,
            is_override: data.is_override,
            is_definition: data.is_definition,
            special: data.special,
        }
    }

    /// True for the universal root type
    #[inline]
    #[must_use]
    pub fn is_root_object(&self) -> bool {
        self.special == SpecialType::Object
    }
}
