//! Type-expression parsing: `(quantifier? function-type)`, right-associative
//! arrows, left-associative application, `[T]` sugar for `List T`.

use crate::ast::TypeExpr;
use crate::error::SolisResult;
use crate::token::{Keyword, Symbol, TokenKind};

use super::Parser;

impl Parser {
    pub(super) fn parse_type(&mut self) -> SolisResult<TypeExpr> {
        if self.match_keyword(Keyword::Forall) {
            let params = self.parse_quantifier_params()?;
            return Ok(TypeExpr::Forall(params, Box::new(self.parse_type()?)));
        }
        if self.match_keyword(Keyword::Exists) {
            let params = self.parse_quantifier_params()?;
            return Ok(TypeExpr::Exists(params, Box::new(self.parse_type()?)));
        }
        self.parse_arrow_type()
    }

    /// A run of identifiers terminated by `.`.
    fn parse_quantifier_params(&mut self) -> SolisResult<Vec<String>> {
        let mut params = Vec::new();
        while let TokenKind::Identifier(_) = self.peek().kind {
            params.push(self.expect_identifier("in quantifier parameter list")?);
        }
        self.expect_symbol(Symbol::Dot, "terminating quantifier parameter list")?;
        Ok(params)
    }

    fn parse_arrow_type(&mut self) -> SolisResult<TypeExpr> {
        let left = self.parse_type_app()?;
        if self.match_symbol(Symbol::Arrow) {
            let right = self.parse_arrow_type()?;
            Ok(TypeExpr::Arrow(Box::new(left), Box::new(right)))
        } else {
            Ok(left)
        }
    }

    /// Left-associative juxtaposition. A constructor-headed chain collapses
    /// into a single [`TypeExpr::Named`]; anything else folds into
    /// [`TypeExpr::App`].
    fn parse_type_app(&mut self) -> SolisResult<TypeExpr> {
        let head = self.parse_type_atom()?;
        let mut args = Vec::new();
        while self.starts_type_atom() {
            args.push(self.parse_type_atom()?);
        }
        if args.is_empty() {
            return Ok(head);
        }
        match head {
            TypeExpr::Named(name, existing) if existing.is_empty() => Ok(TypeExpr::Named(name, args)),
            other => {
                let mut expr = other;
                for arg in args {
                    expr = TypeExpr::App(Box::new(expr), Box::new(arg));
                }
                Ok(expr)
            }
        }
    }

    fn starts_type_atom(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Identifier(_)
                | TokenKind::Constructor(_)
                | TokenKind::Symbol(Symbol::LParen)
                | TokenKind::Symbol(Symbol::LBracket)
        )
    }

    fn parse_type_atom(&mut self) -> SolisResult<TypeExpr> {
        if let TokenKind::Identifier(_) = self.peek().kind {
            return Ok(TypeExpr::Var(self.expect_identifier("in type")?));
        }
        if let TokenKind::Constructor(_) = self.peek().kind {
            return Ok(TypeExpr::Named(self.expect_constructor("in type")?, Vec::new()));
        }
        if self.match_symbol(Symbol::LParen) {
            let inner = self.parse_type()?;
            self.expect_symbol(Symbol::RParen, "closing parenthesized type")?;
            return Ok(inner);
        }
        if self.match_symbol(Symbol::LBracket) {
            let elem = self.parse_type()?;
            self.expect_symbol(Symbol::RBracket, "closing list type")?;
            return Ok(TypeExpr::Named("List".to_string(), vec![elem]));
        }
        Err(self.unexpected("in type"))
    }

    /// A type parameter is a bare identifier, or `(name : kind)` with the
    /// kind parsed and discarded.
    pub(super) fn parse_type_param(&mut self) -> SolisResult<String> {
        if self.match_symbol(Symbol::LParen) {
            let name = self.expect_identifier("in kinded type parameter")?;
            self.expect_symbol(Symbol::Colon, "before kind")?;
            let _kind = self.parse_type()?;
            self.expect_symbol(Symbol::RParen, "closing kinded type parameter")?;
            Ok(name)
        } else {
            self.expect_identifier("in type parameter list")
        }
    }
}
