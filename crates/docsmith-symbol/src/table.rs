//! In-memory symbol snapshot
//!
//! [`SymbolTable`] stores pre-built declaration metadata and answers
//! [`SymbolService`] queries against it. It can be assembled in code or
//! loaded from JSON.

use crate::display::{format_cref, CrefStyle, DisplayParts};
use crate::error::SymbolError;
use crate::service::SymbolService;
use crate::symbol::{InterfaceMapping, Symbol, SymbolData, SymbolId};
use async_trait::async_trait;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Immutable-after-build declaration metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    symbols: Vec<SymbolData>,
}

impl SymbolTable {
    /// Create empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a table from JSON
    ///
    /// # Errors
    /// [`SymbolError::Metadata`] when the JSON does not describe a table.
    pub fn from_json(json: &str) -> Result<Self, SymbolError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    /// [`SymbolError::Io`] or [`SymbolError::Metadata`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SymbolError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), symbols = table.len(), "loaded symbol table");
        Ok(table)
    }

    /// Encode the table as JSON
    ///
    /// # Errors
    /// [`SymbolError::Metadata`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SymbolError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a symbol and return its id
    pub fn add(&mut self, data: SymbolData) -> SymbolId {
        let id = SymbolId::new(u32::try_from(self.symbols.len()).unwrap_or(u32::MAX));
        self.symbols.push(data);
        id
    }

    /// Add a member to `ty`, setting its containing type
    pub fn add_member(&mut self, ty: SymbolId, mut data: SymbolData) -> SymbolId {
        data.containing_type = Some(ty);
        let id = self.add(data);
        if let Some(owner) = self.get_mut(ty) {
            owner.members.push(id);
        }
        id
    }

    /// Record that `implementation` (a member of `ty`) implements `interface_member`
    pub fn implement(&mut self, ty: SymbolId, interface_member: SymbolId, implementation: SymbolId) {
        if let Some(owner) = self.get_mut(ty) {
            owner.implementations.push(InterfaceMapping {
                interface_member,
                implementation,
            });
        }
    }

    /// Stored metadata
    #[inline]
    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<&SymbolData> {
        self.symbols.get(id.raw() as usize)
    }

    /// Mutable stored metadata
    #[inline]
    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut SymbolData> {
        self.symbols.get_mut(id.raw() as usize)
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if table is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn require(&self, id: SymbolId) -> Result<&SymbolData, SymbolError> {
        self.get(id).ok_or(SymbolError::UnknownSymbol(id))
    }

    /// `ty` followed by its base types, nearest first
    fn type_chain(&self, ty: SymbolId) -> Vec<SymbolId> {
        let mut chain = Vec::new();
        let mut current = Some(ty);
        while let Some(id) = current {
            // Guard against malformed metadata with base cycles.
            if chain.contains(&id) {
                break;
            }
            chain.push(id);
            current = self.get(id).and_then(|d| d.base_type);
        }
        chain
    }

    fn all_interfaces(&self, ty: SymbolId) -> Vec<SymbolId> {
        let mut all = IndexSet::new();
        for id in self.type_chain(ty) {
            if let Some(data) = self.get(id) {
                all.extend(data.interfaces.iter().copied());
            }
        }
        all.into_iter().collect()
    }

    fn find_implementation(&self, ty: SymbolId, interface_member: SymbolId) -> Option<SymbolId> {
        for id in self.type_chain(ty) {
            let Some(data) = self.get(id) else { continue };

            let mapped = data
                .implementations
                .iter()
                .find(|m| m.interface_member == interface_member)
                .map(|m| m.implementation);
            if mapped.is_some() {
                return mapped;
            }

            let explicit = data.members.iter().copied().find(|member| {
                self.get(*member).is_some_and(|m| {
                    m.explicit_interface_implementations.contains(&interface_member)
                })
            });
            if explicit.is_some() {
                return explicit;
            }
        }
        None
    }

    fn display_parts(&self, id: SymbolId) -> Result<DisplayParts, SymbolError> {
        let data = self.require(id)?;

        let mut containers = Vec::new();
        let mut outermost = data;
        let mut current = data.containing_type;
        while let Some(container) = current {
            let container_data = self.require(container)?;
            containers.push((container_data.name.clone(), container_data.type_parameters.clone()));
            outermost = container_data;
            current = container_data.containing_type;
        }
        containers.reverse();

        Ok(DisplayParts {
            namespace: outermost.namespace.clone(),
            containers,
            kind: Some(data.kind),
            name: data.name.clone(),
            type_parameters: data.type_parameters.clone(),
            parameters: data.parameters.clone(),
        })
    }
}

#[async_trait]
impl SymbolService for SymbolTable {
    async fn symbol(&self, id: SymbolId) -> Result<Option<Symbol>, SymbolError> {
        Ok(self.get(id).map(|data| Symbol::from_data(id, data)))
    }

    async fn overridden_member(&self, member: SymbolId) -> Result<Option<SymbolId>, SymbolError> {
        Ok(self.require(member)?.overridden_member)
    }

    async fn explicit_interface_implementations(
        &self,
        member: SymbolId,
    ) -> Result<Vec<SymbolId>, SymbolError> {
        Ok(self
            .require(member)?
            .explicit_interface_implementations
            .iter()
            .copied()
            .collect())
    }

    async fn interfaces_of(&self, ty: SymbolId) -> Result<Vec<SymbolId>, SymbolError> {
        self.require(ty)?;
        Ok(self.all_interfaces(ty))
    }

    async fn members_named(&self, ty: SymbolId, name: &str) -> Result<Vec<SymbolId>, SymbolError> {
        Ok(self
            .require(ty)?
            .members
            .iter()
            .copied()
            .filter(|member| self.get(*member).is_some_and(|m| m.name == name))
            .collect())
    }

    async fn interface_implementation(
        &self,
        ty: SymbolId,
        interface_member: SymbolId,
    ) -> Result<Option<SymbolId>, SymbolError> {
        self.require(ty)?;
        Ok(self.find_implementation(ty, interface_member))
    }

    async fn documentation_text(&self, id: SymbolId) -> Result<String, SymbolError> {
        Ok(self.require(id)?.documentation.clone().unwrap_or_default())
    }

    async fn display_string(&self, id: SymbolId, style: CrefStyle) -> Result<String, SymbolError> {
        Ok(format_cref(&self.display_parts(id)?, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolKind;
    use pretty_assertions::assert_eq;

    fn disposable_table() -> (SymbolTable, SymbolId, SymbolId, SymbolId, SymbolId) {
        let mut table = SymbolTable::new();
        let iface = table.add(SymbolData::new(SymbolKind::Type, "IDisposable").with_namespace("System"));
        let dispose = table.add_member(iface, SymbolData::new(SymbolKind::Method, "Dispose"));
        let class = table.add(
            SymbolData::new(SymbolKind::Type, "Connection")
                .with_namespace("App.Data")
                .with_interface(iface),
        );
        let imp = table.add_member(class, SymbolData::new(SymbolKind::Method, "Dispose"));
        table.implement(class, dispose, imp);
        (table, iface, dispose, class, imp)
    }

    #[tokio::test]
    async fn members_and_interfaces() {
        let (table, iface, dispose, class, imp) = disposable_table();

        assert_eq!(table.members_named(iface, "Dispose").await.unwrap(), vec![dispose]);
        assert_eq!(table.interfaces_of(class).await.unwrap(), vec![iface]);
        assert_eq!(table.interface_implementation(class, dispose).await.unwrap(), Some(imp));
        assert_eq!(table.symbol(imp).await.unwrap().unwrap().containing_type, Some(class));
    }

    #[tokio::test]
    async fn implementation_found_through_base_type() {
        let (mut table, iface, dispose, class, imp) = disposable_table();
        let derived = table.add(SymbolData::new(SymbolKind::Type, "PooledConnection").with_base_type(class));

        assert_eq!(table.interfaces_of(derived).await.unwrap(), vec![iface]);
        assert_eq!(table.interface_implementation(derived, dispose).await.unwrap(), Some(imp));
    }

    #[tokio::test]
    async fn explicit_implementation_counts_as_mapping() {
        let (mut table, _iface, dispose, class, _imp) = disposable_table();
        let other = table.add(SymbolData::new(SymbolKind::Type, "Other"));
        let explicit = table.add_member(
            other,
            SymbolData::new(SymbolKind::Method, "Dispose").with_explicit_implementation(dispose),
        );

        assert_eq!(table.interface_implementation(other, dispose).await.unwrap(), Some(explicit));
        assert_ne!(table.interface_implementation(class, dispose).await.unwrap(), Some(explicit));
    }

    #[tokio::test]
    async fn unknown_symbols() {
        let table = SymbolTable::new();
        let missing = SymbolId::new(42);

        assert!(table.symbol(missing).await.unwrap().is_none());
        assert!(matches!(
            table.documentation_text(missing).await,
            Err(SymbolError::UnknownSymbol(id)) if id == missing
        ));
    }

    #[tokio::test]
    async fn documentation_defaults_to_empty() {
        let (table, iface, ..) = disposable_table();
        assert_eq!(table.documentation_text(iface).await.unwrap(), "");
    }

    #[tokio::test]
    async fn display_strings() {
        let (table, _iface, dispose, _class, imp) = disposable_table();

        assert_eq!(
            table.display_string(dispose, CrefStyle::Full).await.unwrap(),
            "global::System.IDisposable.Dispose()"
        );
        assert_eq!(
            table.display_string(imp, CrefStyle::Short).await.unwrap(),
            "Connection.Dispose()"
        );
    }

    #[test]
    fn base_cycles_terminate() {
        let mut table = SymbolTable::new();
        let a = table.add(SymbolData::new(SymbolKind::Type, "A"));
        let b = table.add(SymbolData::new(SymbolKind::Type, "B").with_base_type(a));
        if let Some(data) = table.get_mut(a) {
            data.base_type = Some(b);
        }
        assert_eq!(table.type_chain(a), vec![a, b]);
    }

    #[test]
    fn json_roundtrip_through_file() {
        let (table, ..) = disposable_table();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbols.json");
        std::fs::write(&path, table.to_json().unwrap()).unwrap();

        assert_eq!(SymbolTable::load(&path).unwrap(), table);
    }

    #[test]
    fn invalid_json_is_metadata_error() {
        assert!(matches!(
            SymbolTable::from_json("{\"symbols\": 3}"),
            Err(SymbolError::Metadata(_))
        ));
    }
}
