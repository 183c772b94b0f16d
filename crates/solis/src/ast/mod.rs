//! The abstract syntax tree produced by [`crate::parser::Parser`].
//!
//! Every node kind here is a closed sum type; there is no inheritance-style
//! node hierarchy.

pub mod decl;
pub mod expr;
pub mod pattern;
pub mod types;

pub use decl::{Decl, FunctionDecl, ImplDecl, ImportDecl, ImportFilter, ModuleDecl, TraitDecl, TypeDecl, TypeRhs};
pub use expr::{Expr, ExprLit};
pub use pattern::{Pattern, CONS_NAME};
pub use types::TypeExpr;

/// A parsed compilation unit: optional module header, imports, then
/// declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Module {
    pub module_decl: Option<ModuleDecl>,
    pub imports: Vec<ImportDecl>,
    pub declarations: Vec<Decl>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }
}
