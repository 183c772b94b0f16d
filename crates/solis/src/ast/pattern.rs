//! Pattern AST nodes.

use crate::ast::expr::ExprLit;

/// The fixed constructor name used for the `::` cons cell, both in
/// [`Pattern::Cons`] and in the runtime constructor registry.
pub const CONS_NAME: &str = "::";

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Wildcard,
    Var(String),
    Lit(ExprLit),
    List(Vec<Pattern>),
    /// A constructor pattern. `Cons("::", [head, tail])` is the cons-cell
    /// pattern produced by the infix `:` operator or the prefix `::`.
    Cons(String, Vec<Pattern>),
    Record(Vec<(String, Pattern)>),
}

impl Pattern {
    pub fn cons(head: Pattern, tail: Pattern) -> Pattern {
        Pattern::Cons(CONS_NAME.to_string(), vec![head, tail])
    }
}
