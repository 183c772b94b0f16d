//! The narrow seam this core exposes to an external module resolver and
//! namespace manager. Neither is implemented here; per design, resolving a
//! dotted import to a file and tracking cross-module visibility are
//! collaborators' concerns, not the interpreter's.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::{Error, ErrorKind, SolisResult};

/// A resolved binding, as reported by an external namespace manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub module: String,
    pub name: String,
}

/// Resolves a dotted module name to a source file. The core ships no
/// implementation, only this stub seam.
pub trait ModuleResolver {
    fn resolve(&self, from: &Path, dotted_name: &str) -> SolisResult<PathBuf>;
}

/// Qualified (`qualifier → name → Symbol`) and unqualified (`name →
/// candidates`) symbol tables. Ambiguity is reported, not resolved, when an
/// unqualified name has more than one candidate.
#[derive(Debug, Default)]
pub struct NamespaceTable {
    qualified: IndexMap<String, IndexMap<String, Symbol>>,
    unqualified: IndexMap<String, Vec<Symbol>>,
}

impl NamespaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_qualified(&mut self, qualifier: impl Into<String>, symbol: Symbol) {
        self.qualified.entry(qualifier.into()).or_default().insert(symbol.name.clone(), symbol);
    }

    pub fn register_unqualified(&mut self, symbol: Symbol) {
        self.unqualified.entry(symbol.name.clone()).or_default().push(symbol);
    }

    pub fn resolve_unqualified(&self, name: &str) -> SolisResult<Option<&Symbol>> {
        match self.unqualified.get(name) {
            None => Ok(None),
            Some(candidates) if candidates.len() > 1 => {
                Err(Error::new(ErrorKind::UnboundVariable, format!("ambiguous reference to `{name}`")))
            }
            Some(candidates) => Ok(candidates.first()),
        }
    }
}
