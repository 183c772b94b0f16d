//! Declaration AST nodes: the top-level items a [`crate::ast::Module`] holds.

use crate::ast::expr::Expr;
use crate::ast::pattern::Pattern;
use crate::ast::types::TypeExpr;
use crate::error::Position;

/// A function declaration: `let name pat* [: type] = body`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub type_annotation: Option<TypeExpr>,
    pub params: Vec<Pattern>,
    pub body: Expr,
    pub position: Position,
}

/// The right-hand side of a `type`/`data` declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRhs {
    /// `{ field : Type, … }`.
    Record(Vec<(String, TypeExpr)>),
    /// `Con Type* | Con Type* | …`.
    Variants(Vec<(String, Vec<TypeExpr>)>),
    /// A plain alias to another type expression.
    Alias(TypeExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub name: String,
    pub type_params: Vec<String>,
    pub rhs: TypeRhs,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraitDecl {
    pub name: String,
    pub type_params: Vec<String>,
    pub methods: Vec<(String, TypeExpr)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImplDecl {
    pub trait_name: Option<String>,
    pub target: TypeExpr,
    pub methods: Vec<FunctionDecl>,
}

/// A dotted module path, e.g. `A.B.C`.
pub type DottedName = Vec<String>;

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDecl {
    pub name: DottedName,
    pub exports: Option<Vec<String>>,
}

/// The optional name-filtering clause on an [`ImportDecl`].
#[derive(Debug, Clone, PartialEq)]
pub enum ImportFilter {
    None,
    Hiding(Vec<String>),
    Only(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub qualified: bool,
    pub path: DottedName,
    pub alias: Option<String>,
    pub filter: ImportFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Function(FunctionDecl),
    Type(TypeDecl),
    Trait(TraitDecl),
    Impl(ImplDecl),
}
