//! Module header, import, and top-level declaration parsing.

use crate::ast::decl::{DottedName, FunctionDecl, ImplDecl, ImportDecl, ImportFilter, ModuleDecl, TraitDecl, TypeDecl, TypeRhs};
use crate::error::SolisResult;
use crate::token::{Keyword, Symbol, TokenKind};

use super::Parser;

impl Parser {
    fn parse_dotted_name(&mut self) -> SolisResult<DottedName> {
        let mut parts = vec![self.expect_name("in dotted name")?];
        while self.match_symbol(Symbol::Dot) {
            parts.push(self.expect_name("in dotted name")?);
        }
        Ok(parts)
    }

    fn parse_name_list(&mut self) -> SolisResult<Vec<String>> {
        self.expect_symbol(Symbol::LParen, "opening name list")?;
        let mut names = Vec::new();
        if !self.check_symbol(Symbol::RParen) {
            names.push(self.expect_name("in name list")?);
            while self.match_symbol(Symbol::Comma) {
                names.push(self.expect_name("in name list")?);
            }
        }
        self.expect_symbol(Symbol::RParen, "closing name list")?;
        Ok(names)
    }

    pub(super) fn parse_module_header(&mut self) -> SolisResult<ModuleDecl> {
        self.expect_keyword(Keyword::Module, "starting module header")?;
        let name = self.parse_dotted_name()?;
        let exports = if self.check_symbol(Symbol::LParen) { Some(self.parse_name_list()?) } else { None };
        self.expect_keyword(Keyword::Where, "ending module header")?;
        Ok(ModuleDecl { name, exports })
    }

    pub(super) fn parse_import(&mut self) -> SolisResult<ImportDecl> {
        self.expect_keyword(Keyword::Import, "starting import")?;
        let qualified = self.match_keyword(Keyword::Qualified);
        let path = self.parse_dotted_name()?;
        let alias = if self.match_keyword(Keyword::As) { Some(self.expect_name("after `as`")?) } else { None };
        let filter = if self.match_keyword(Keyword::Hiding) {
            ImportFilter::Hiding(self.parse_name_list()?)
        } else if self.check_symbol(Symbol::LParen) {
            ImportFilter::Only(self.parse_name_list()?)
        } else {
            ImportFilter::None
        };
        Ok(ImportDecl { qualified, path, alias, filter })
    }

    pub(super) fn parse_function_decl(&mut self) -> SolisResult<FunctionDecl> {
        let start = self.expect_keyword(Keyword::Let, "starting function declaration")?;
        let name = self.expect_identifier("as function name")?;
        let mut params = Vec::new();
        while self.starts_primary_pattern() {
            params.push(self.parse_primary_pattern()?);
        }
        let type_annotation = if self.match_symbol(Symbol::Colon) { Some(self.parse_type()?) } else { None };
        self.expect_symbol(Symbol::Eq, "before function body")?;
        let body = self.parse_expression()?;
        Ok(FunctionDecl { name, type_annotation, params, body, position: start.position })
    }

    pub(super) fn parse_type_decl(&mut self) -> SolisResult<TypeDecl> {
        if !self.match_keyword(Keyword::Type) {
            self.expect_keyword(Keyword::Data, "starting type declaration")?;
        }
        let name = self.expect_constructor("as type name")?;
        let mut type_params = Vec::new();
        while matches!(self.peek().kind, TokenKind::Identifier(_)) || self.check_symbol(Symbol::LParen) {
            type_params.push(self.parse_type_param()?);
        }
        self.expect_symbol(Symbol::Eq, "before type right-hand side")?;
        let rhs = self.parse_type_rhs()?;
        Ok(TypeDecl { name, type_params, rhs })
    }

    fn parse_type_rhs(&mut self) -> SolisResult<TypeRhs> {
        if self.match_symbol(Symbol::LBrace) {
            let mut fields = Vec::new();
            if !self.check_symbol(Symbol::RBrace) {
                fields.push(self.parse_record_type_field()?);
                while self.match_symbol(Symbol::Comma) {
                    fields.push(self.parse_record_type_field()?);
                }
            }
            self.expect_symbol(Symbol::RBrace, "closing record type")?;
            return Ok(TypeRhs::Record(fields));
        }

        // Try to read this as an ADT constructor list; a bare type expression
        // with no leading constructor is an alias instead.
        if matches!(self.peek().kind, TokenKind::Constructor(_)) {
            let mut variants = vec![self.parse_type_variant()?];
            while self.match_symbol(Symbol::Pipe) {
                variants.push(self.parse_type_variant()?);
            }
            return Ok(TypeRhs::Variants(variants));
        }

        Ok(TypeRhs::Alias(self.parse_type()?))
    }

    fn parse_record_type_field(&mut self) -> SolisResult<(String, crate::ast::TypeExpr)> {
        let name = self.expect_identifier("in record type field")?;
        self.expect_symbol(Symbol::Colon, "before record field type")?;
        let ty = self.parse_type()?;
        Ok((name, ty))
    }

    fn parse_type_variant(&mut self) -> SolisResult<(String, Vec<crate::ast::TypeExpr>)> {
        let name = self.expect_constructor("as constructor name")?;
        let mut args = Vec::new();
        while self.starts_type_variant_arg() {
            args.push(self.parse_type_variant_arg()?);
        }
        Ok((name, args))
    }

    fn starts_type_variant_arg(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Identifier(_) | TokenKind::Constructor(_) | TokenKind::Symbol(Symbol::LParen) | TokenKind::Symbol(Symbol::LBracket)
        )
    }

    fn parse_type_variant_arg(&mut self) -> SolisResult<crate::ast::TypeExpr> {
        // Constructor argument positions are single type atoms; route through
        // a parenthesized/bare type to avoid swallowing the next variant.
        if self.match_symbol(Symbol::LParen) {
            let inner = self.parse_type()?;
            self.expect_symbol(Symbol::RParen, "closing parenthesized constructor argument")?;
            return Ok(inner);
        }
        if matches!(self.peek().kind, TokenKind::Identifier(_)) {
            return Ok(crate::ast::TypeExpr::Var(self.expect_identifier("in constructor argument")?));
        }
        if matches!(self.peek().kind, TokenKind::Constructor(_)) {
            return Ok(crate::ast::TypeExpr::Named(self.expect_constructor("in constructor argument")?, Vec::new()));
        }
        self.parse_type()
    }

    pub(super) fn parse_trait_decl(&mut self) -> SolisResult<TraitDecl> {
        self.expect_keyword(Keyword::Trait, "starting trait declaration")?;
        let name = self.expect_constructor("as trait name")?;
        let mut type_params = Vec::new();
        while matches!(self.peek().kind, TokenKind::Identifier(_)) {
            type_params.push(self.parse_type_param()?);
        }
        self.expect_keyword(Keyword::Where, "before trait method signatures")?;
        let mut methods = Vec::new();
        while matches!(self.peek().kind, TokenKind::Identifier(_)) && !self.starts_top_level_keyword() {
            let method_name = self.expect_identifier("as trait method name")?;
            self.expect_symbol(Symbol::ColonColon, "before trait method type")?;
            let ty = self.parse_type()?;
            methods.push((method_name, ty));
        }
        Ok(TraitDecl { name, type_params, methods })
    }

    fn starts_top_level_keyword(&self) -> bool {
        self.check_keyword(Keyword::Let)
            || self.check_keyword(Keyword::Type)
            || self.check_keyword(Keyword::Data)
            || self.check_keyword(Keyword::Trait)
            || self.check_keyword(Keyword::Impl)
            || self.check_keyword(Keyword::Module)
            || self.check_keyword(Keyword::Import)
    }

    pub(super) fn parse_impl_decl(&mut self) -> SolisResult<ImplDecl> {
        self.expect_keyword(Keyword::Impl, "starting impl declaration")?;
        let head = self.parse_type()?;

        if self.match_symbol(Symbol::LBrace) {
            let mut methods = Vec::new();
            while self.check_keyword(Keyword::Let) {
                methods.push(self.parse_function_decl()?);
            }
            self.expect_symbol(Symbol::RBrace, "closing structural impl body")?;
            return Ok(ImplDecl { trait_name: None, target: head, methods });
        }

        self.expect_keyword(Keyword::Where, "before classic impl method definitions")?;
        let (trait_name, target) = match head {
            crate::ast::TypeExpr::Named(name, mut args) if args.len() == 1 => (Some(name), args.remove(0)),
            other => (None, other),
        };
        let mut methods = Vec::new();
        while self.check_keyword(Keyword::Let) {
            methods.push(self.parse_function_decl()?);
        }
        Ok(ImplDecl { trait_name, target, methods })
    }
}
