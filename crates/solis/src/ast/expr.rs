//! Expression AST nodes.

use crate::ast::pattern::Pattern;
use crate::bigint::BigInt;

/// A literal value embedded directly in an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprLit {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Big(BigInt),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Var(String),
    Lit(ExprLit),
    Lambda(Vec<Pattern>, Box<Expr>),
    /// Function application; always unary. `f a b` parses as
    /// `App(App(f, a), b)`.
    App(Box<Expr>, Box<Expr>),
    /// `let pat = value in body`. `body` is `Lit(Bool(true))` when the
    /// surface syntax omits both `;` and `in`.
    Let(Pattern, Box<Expr>, Box<Expr>),
    Match(Box<Expr>, Vec<(Pattern, Expr)>),
    If(Box<Expr>, Box<Expr>, Box<Expr>),
    /// Binary operator by lexeme (`"+"`, `"::"`, …); right-associative and
    /// precedence-free, per the grammar.
    BinOp(String, Box<Expr>, Box<Expr>),
    List(Vec<Expr>),
    /// Ordered record literal, field name to value expression.
    Record(Vec<(String, Expr)>),
    RecordAccess(Box<Expr>, String),
    /// `{ base | field = value, … }`.
    RecordUpdate(Box<Expr>, Vec<(String, Expr)>),
    /// A braced or `do`-tagged sequence of statement expressions; the
    /// block's value is that of its last statement.
    Block(Vec<Expr>, bool),
    /// `pat <- action; body`.
    Bind(Pattern, Box<Expr>, Box<Expr>),
    /// Prefix `!`: force the operand to weak head normal form.
    Strict(Box<Expr>),
}
