//! Cross-reference display strings
//!
//! Formats a symbol the way documentation `cref` attributes spell it: the
//! qualified name with generic brackets rewritten from `<T>` to `{T}`.

use crate::symbol::SymbolKind;

/// Qualification used for a cref
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrefStyle {
    /// `global::` prefix, namespace and containing types
    #[default]
    Full,

    /// Containing types and name only
    Short,
}

/// Name parts of a symbol, outermost first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayParts {
    /// Namespace of the outermost type
    pub namespace: Option<String>,

    /// Containing types as `(name, type parameters)`, outermost first
    pub containers: Vec<(String, Vec<String>)>,

    /// Kind of the symbol itself
    pub kind: Option<SymbolKind>,

    /// Simple name
    pub name: String,

    /// Type parameters of the symbol itself
    pub type_parameters: Vec<String>,

    /// Parameter types (methods only)
    pub parameters: Vec<String>,
}

/// Format a cref string
///
/// ```
/// use docsmith_symbol::{format_cref, CrefStyle, DisplayParts, SymbolKind};
///
/// let parts = DisplayParts {
///     namespace: Some("System.Collections.Generic".into()),
///     containers: vec![("List".into(), vec!["T".into()])],
///     kind: Some(SymbolKind::Method),
///     name: "Add".into(),
///     type_parameters: vec![],
///     parameters: vec!["T".into()],
/// };
///
/// assert_eq!(format_cref(&parts, CrefStyle::Full), "global::System.Collections.Generic.List{T}.Add(T)");
/// assert_eq!(format_cref(&parts, CrefStyle::Short), "List{T}.Add(T)");
/// ```
#[must_use]
pub fn format_cref(parts: &DisplayParts, style: CrefStyle) -> String {
    let mut out = String::new();

    if style == CrefStyle::Full {
        out.push_str("global::");
        if let Some(namespace) = parts.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            out.push_str(namespace);
            out.push('.');
        }
    }

    for (name, type_parameters) in &parts.containers {
        push_generic_name(&mut out, name, type_parameters);
        out.push('.');
    }

    push_generic_name(&mut out, &parts.name, &parts.type_parameters);

    if parts.kind == Some(SymbolKind::Method) {
        out.push('(');
        out.push_str(&parts.parameters.join(", "));
        out.push(')');
    }

    out.chars()
        .map(|c| match c {
            '<' => '{',
            '>' => '}',
            other => other,
        })
        .collect()
}

fn push_generic_name(out: &mut String, name: &str, type_parameters: &[String]) {
    out.push_str(name);
    if !type_parameters.is_empty() {
        out.push('<');
        out.push_str(&type_parameters.join(", "));
        out.push('>');
    }
}
