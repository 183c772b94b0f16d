//! Handwritten recursive-descent parser.
//!
//! The parser holds a token vector and a cursor; there is no other hidden
//! state. Lookahead is one token (`peek`) almost everywhere, and two tokens
//! in the two spots the grammar calls out: signed-literal folding and the
//! record/block brace disambiguation (see [`expr`]).

mod decl;
mod expr;
mod pattern;
mod types;

use crate::ast::{Decl, Module};
use crate::error::{Error, Position, SolisResult};
use crate::lexer::Lexer;
use crate::token::{Keyword, Symbol, Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Parses an entire module, resynchronizing past any declaration-level
    /// error rather than aborting. Errors raised while parsing a top-level
    /// declaration's own body (an expression, a type, …) are caught at this
    /// level too: the declaration is dropped and scanning resumes after the
    /// next `;` or before the next declaration keyword.
    pub fn parse_module(&mut self) -> Module {
        let mut module = Module::new();

        if self.check_keyword(Keyword::Module) {
            match self.parse_module_header() {
                Ok(header) => module.module_decl = Some(header),
                Err(_) => self.resynchronize(),
            }
        }

        while self.check_keyword(Keyword::Import) {
            match self.parse_import() {
                Ok(import) => module.imports.push(import),
                Err(_) => self.resynchronize(),
            }
        }

        while !self.is_at_end() {
            match self.parse_declaration() {
                Ok(decl) => module.declarations.push(decl),
                Err(_) => self.resynchronize(),
            }
        }

        module
    }

    /// Parses exactly one declaration (skipping a leading `export` keyword,
    /// which has no runtime effect in this core). Returns an error on the
    /// first unexpected token; the caller decides whether to resynchronize.
    pub fn parse_declaration(&mut self) -> SolisResult<Decl> {
        self.match_keyword(Keyword::Export);
        if self.check_keyword(Keyword::Let) {
            Ok(Decl::Function(self.parse_function_decl()?))
        } else if self.check_keyword(Keyword::Type) || self.check_keyword(Keyword::Data) {
            Ok(Decl::Type(self.parse_type_decl()?))
        } else if self.check_keyword(Keyword::Trait) {
            Ok(Decl::Trait(self.parse_trait_decl()?))
        } else if self.check_keyword(Keyword::Impl) {
            Ok(Decl::Impl(self.parse_impl_decl()?))
        } else {
            Err(self.unexpected("at declaration start"))
        }
    }

    /// Discards tokens until after the next `;` or before the next token
    /// that can start a declaration, import, or module header.
    fn resynchronize(&mut self) {
        loop {
            if self.is_at_end() {
                return;
            }
            if self.match_symbol(Symbol::Semi) {
                return;
            }
            if self.check_keyword(Keyword::Let)
                || self.check_keyword(Keyword::Type)
                || self.check_keyword(Keyword::Module)
                || self.check_keyword(Keyword::Import)
            {
                return;
            }
            self.advance();
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_at(&self, offset: usize) -> &Token {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn position(&self) -> Position {
        self.peek().position
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        tok
    }

    fn check_symbol(&self, sym: Symbol) -> bool {
        matches!(self.peek().kind, TokenKind::Symbol(s) if s == sym)
    }

    fn check_keyword(&self, kw: Keyword) -> bool {
        matches!(self.peek().kind, TokenKind::Keyword(k) if k == kw)
    }

    fn match_symbol(&mut self, sym: Symbol) -> bool {
        if self.check_symbol(sym) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_keyword(&mut self, kw: Keyword) -> bool {
        if self.check_keyword(kw) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_symbol(&mut self, sym: Symbol, ctx: &str) -> SolisResult<Token> {
        if self.check_symbol(sym) { Ok(self.advance()) } else { Err(self.unexpected(ctx)) }
    }

    fn expect_keyword(&mut self, kw: Keyword, ctx: &str) -> SolisResult<Token> {
        if self.check_keyword(kw) { Ok(self.advance()) } else { Err(self.unexpected(ctx)) }
    }

    fn expect_identifier(&mut self, ctx: &str) -> SolisResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(ctx)),
        }
    }

    fn expect_constructor(&mut self, ctx: &str) -> SolisResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Constructor(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(ctx)),
        }
    }

    /// Either an identifier or a constructor lexeme, used for the name
    /// positions in export/hiding/import lists where case is not meaningful.
    fn expect_name(&mut self, ctx: &str) -> SolisResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Identifier(name) | TokenKind::Constructor(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(ctx)),
        }
    }

    fn unexpected(&self, ctx: &str) -> Error {
        Error::parse(self.position(), format!("unexpected token `{}` {ctx}", self.peek().lexeme))
    }
}

/// Parses a standalone expression from raw source text. Rebuilds a fresh
/// lexer and parser; does not catch or resynchronize past errors.
pub fn parse_expression_from_source(source: &str) -> SolisResult<crate::ast::Expr> {
    let tokens = Lexer::new(source).tokenize();
    let mut parser = Parser::new(tokens);
    parser.parse_expression()
}
