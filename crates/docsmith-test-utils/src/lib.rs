//! Testing utilities for the Docsmith workspace
//!
//! Shared fixtures, in-memory hosts and tracing setup.

#![allow(missing_docs)]

use async_trait::async_trait;
use docsmith_core::{DocEdit, DocumentHost, EditApplier};
use docsmith_strategy::Declaration;
use docsmith_symbol::{
    CrefStyle, Symbol, SymbolData, SymbolError, SymbolId, SymbolKind, SymbolService, SymbolTable,
};
use std::sync::{Arc, Once};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per process (`RUST_LOG`, default `warn`)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A symbol table with the declaration under test and its inheritance source
#[derive(Debug, Clone)]
pub struct Scenario {
    pub table: SymbolTable,
    pub target: SymbolId,
    pub source: SymbolId,
}

impl Scenario {
    /// Set the target's own documentation
    pub fn with_existing(mut self, documentation: &str) -> Self {
        if let Some(data) = self.table.get_mut(self.target) {
            data.documentation = Some(documentation.to_string());
        }
        self
    }

    pub fn declaration(&self, indentation: &str) -> Declaration {
        Declaration::new(self.target, indentation)
    }

    pub fn host(&self, text: &str) -> StaticHost {
        StaticHost::new(text, self.table.clone())
    }
}

/// `Derived.Value` overriding `Base.Value`; the base property carries `doc`
pub fn overridden_property(doc: &str) -> Scenario {
    let mut table = SymbolTable::new();
    let object = table.add(
        SymbolData::new(SymbolKind::Type, "Object")
            .with_namespace("System")
            .with_special(docsmith_symbol::SpecialType::Object),
    );
    let base = table.add(
        SymbolData::new(SymbolKind::Type, "Base")
            .with_namespace("App")
            .with_base_type(object),
    );
    let source = table.add_member(
        base,
        SymbolData::new(SymbolKind::Property, "Value").with_documentation(doc),
    );
    let derived = table.add(
        SymbolData::new(SymbolKind::Type, "Derived")
            .with_namespace("App")
            .with_base_type(base),
    );
    let target = table.add_member(
        derived,
        SymbolData::new(SymbolKind::Property, "Value").with_overridden_member(source),
    );
    Scenario { table, target, source }
}

/// `Connection.Dispose` implicitly implementing `IDisposable.Dispose` (documented with `doc`)
pub fn implicit_interface_method(doc: &str) -> Scenario {
    let mut table = SymbolTable::new();
    let iface = table.add(SymbolData::new(SymbolKind::Type, "IDisposable").with_namespace("System"));
    let source = table.add_member(
        iface,
        SymbolData::new(SymbolKind::Method, "Dispose").with_documentation(doc),
    );
    let class = table.add(
        SymbolData::new(SymbolKind::Type, "Connection")
            .with_namespace("App.Data")
            .with_interface(iface),
    );
    let target = table.add_member(class, SymbolData::new(SymbolKind::Method, "Dispose"));
    table.implement(class, source, target);
    Scenario { table, target, source }
}

/// `Dog : Animal : Object`; `Animal` carries `doc`
pub fn derived_type(doc: &str) -> Scenario {
    let mut table = SymbolTable::new();
    let object = table.add(
        SymbolData::new(SymbolKind::Type, "Object")
            .with_namespace("System")
            .with_special(docsmith_symbol::SpecialType::Object)
            .with_documentation("<member><summary>Root of everything.</summary></member>"),
    );
    let source = table.add(
        SymbolData::new(SymbolKind::Type, "Animal")
            .with_namespace("Zoo")
            .with_base_type(object)
            .with_documentation(doc),
    );
    let target = table.add(
        SymbolData::new(SymbolKind::Type, "Dog")
            .with_namespace("Zoo")
            .with_base_type(source),
    );
    Scenario { table, target, source }
}

/// Document with fixed text and an optional snapshot
#[derive(Debug, Clone)]
pub struct StaticHost {
    text: String,
    snapshot: Option<Arc<dyn SymbolService>>,
}

impl StaticHost {
    pub fn new(text: &str, service: impl SymbolService + 'static) -> Self {
        Self {
            text: text.to_string(),
            snapshot: Some(Arc::new(service)),
        }
    }

    /// Host whose semantic analysis is unavailable
    pub fn without_snapshot(text: &str) -> Self {
        Self {
            text: text.to_string(),
            snapshot: None,
        }
    }
}

#[async_trait]
impl DocumentHost for StaticHost {
    fn text(&self) -> &str {
        &self.text
    }

    async fn semantic_snapshot(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Option<Arc<dyn SymbolService>>, SymbolError> {
        docsmith_symbol::checkpoint(cancel)?;
        Ok(self.snapshot.clone())
    }
}

/// Applier that records edits, or fails with a fixed message
#[derive(Debug, Default)]
pub struct RecordingApplier {
    pub edits: Vec<(Declaration, DocEdit)>,
    pub fail_with: Option<String>,
}

impl RecordingApplier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            edits: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }

    /// Text of the most recent edit
    pub fn last_text(&self) -> Option<String> {
        self.edits.last().map(|(_, edit)| edit.text())
    }
}

impl EditApplier for RecordingApplier {
    fn replace_leading_documentation(
        &mut self,
        declaration: &Declaration,
        edit: &DocEdit,
    ) -> anyhow::Result<()> {
        if let Some(message) = &self.fail_with {
            anyhow::bail!("{message}");
        }
        self.edits.push((declaration.clone(), edit.clone()));
        Ok(())
    }
}

/// Snapshot whose documentation lookups fail with a service fault
#[derive(Debug, Clone)]
pub struct FaultyDocumentation {
    pub inner: SymbolTable,
}

#[async_trait]
impl SymbolService for FaultyDocumentation {
    async fn symbol(&self, id: SymbolId) -> Result<Option<Symbol>, SymbolError> {
        self.inner.symbol(id).await
    }

    async fn overridden_member(&self, member: SymbolId) -> Result<Option<SymbolId>, SymbolError> {
        self.inner.overridden_member(member).await
    }

    async fn explicit_interface_implementations(
        &self,
        member: SymbolId,
    ) -> Result<Vec<SymbolId>, SymbolError> {
        self.inner.explicit_interface_implementations(member).await
    }

    async fn interfaces_of(&self, ty: SymbolId) -> Result<Vec<SymbolId>, SymbolError> {
        self.inner.interfaces_of(ty).await
    }

    async fn members_named(&self, ty: SymbolId, name: &str) -> Result<Vec<SymbolId>, SymbolError> {
        self.inner.members_named(ty, name).await
    }

    async fn interface_implementation(
        &self,
        ty: SymbolId,
        interface_member: SymbolId,
    ) -> Result<Option<SymbolId>, SymbolError> {
        self.inner.interface_implementation(ty, interface_member).await
    }

    async fn documentation_text(&self, id: SymbolId) -> Result<String, SymbolError> {
        Err(SymbolError::service(format!("documentation store offline for {id}")))
    }

    async fn display_string(&self, id: SymbolId, style: CrefStyle) -> Result<String, SymbolError> {
        self.inner.display_string(id, style).await
    }
}
