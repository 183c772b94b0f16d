//! Pattern parsing: a primary/cons split. The infix cons operator binds
//! right-associatively over primary patterns.

use crate::ast::expr::ExprLit;
use crate::ast::pattern::CONS_NAME;
use crate::ast::Pattern;
use crate::error::SolisResult;
use crate::token::{Literal, Symbol, TokenKind};

use super::Parser;

impl Parser {
    pub(super) fn parse_pattern(&mut self) -> SolisResult<Pattern> {
        let left = self.parse_primary_pattern()?;
        if self.match_symbol(Symbol::Colon) {
            let right = self.parse_pattern()?;
            Ok(Pattern::cons(left, right))
        } else {
            Ok(left)
        }
    }

    pub(super) fn starts_primary_pattern(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Identifier(_)
                | TokenKind::Constructor(_)
                | TokenKind::Literal(_)
                | TokenKind::Bool(_)
                | TokenKind::Symbol(Symbol::LParen)
                | TokenKind::Symbol(Symbol::LBracket)
                | TokenKind::Symbol(Symbol::LBrace)
                | TokenKind::Symbol(Symbol::ColonColon)
        )
    }

    pub(super) fn parse_primary_pattern(&mut self) -> SolisResult<Pattern> {
        match self.peek().kind.clone() {
            TokenKind::Identifier(name) => {
                self.advance();
                if name == "_" { Ok(Pattern::Wildcard) } else { Ok(Pattern::Var(name)) }
            }
            TokenKind::Literal(lit) => {
                self.advance();
                Ok(Pattern::Lit(match lit {
                    Literal::Int(n) => ExprLit::Int(n),
                    Literal::Float(f) => ExprLit::Float(f),
                    Literal::Str(s) => ExprLit::Str(s),
                    Literal::Big(b) => ExprLit::Big(b),
                }))
            }
            TokenKind::Bool(b) => {
                self.advance();
                Ok(Pattern::Lit(ExprLit::Bool(b)))
            }
            TokenKind::Constructor(name) => {
                self.advance();
                let mut args = Vec::new();
                while self.starts_primary_pattern() {
                    args.push(self.parse_primary_pattern()?);
                }
                Ok(Pattern::Cons(name, args))
            }
            TokenKind::Symbol(Symbol::ColonColon) => {
                self.advance();
                let mut args = Vec::new();
                while self.starts_primary_pattern() {
                    args.push(self.parse_primary_pattern()?);
                }
                Ok(Pattern::Cons(CONS_NAME.to_string(), args))
            }
            TokenKind::Symbol(Symbol::LParen) => {
                self.advance();
                let inner = self.parse_pattern()?;
                self.expect_symbol(Symbol::RParen, "closing parenthesized pattern")?;
                Ok(inner)
            }
            TokenKind::Symbol(Symbol::LBracket) => {
                self.advance();
                let mut elems = Vec::new();
                if !self.check_symbol(Symbol::RBracket) {
                    elems.push(self.parse_pattern()?);
                    while self.match_symbol(Symbol::Comma) {
                        elems.push(self.parse_pattern()?);
                    }
                }
                self.expect_symbol(Symbol::RBracket, "closing list pattern")?;
                Ok(Pattern::List(elems))
            }
            TokenKind::Symbol(Symbol::LBrace) => {
                self.advance();
                let mut fields = Vec::new();
                if !self.check_symbol(Symbol::RBrace) {
                    fields.push(self.parse_pattern_field()?);
                    while self.match_symbol(Symbol::Comma) {
                        fields.push(self.parse_pattern_field()?);
                    }
                }
                self.expect_symbol(Symbol::RBrace, "closing record pattern")?;
                Ok(Pattern::Record(fields))
            }
            _ => Err(self.unexpected("in pattern")),
        }
    }

    fn parse_pattern_field(&mut self) -> SolisResult<(String, Pattern)> {
        let name = self.expect_identifier("in record pattern field")?;
        self.expect_symbol(Symbol::Eq, "after record pattern field name")?;
        let pat = self.parse_pattern()?;
        Ok((name, pat))
    }
}
