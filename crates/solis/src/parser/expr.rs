//! Expression grammar: keyword-led forms, the brace-disambiguated forms of
//! §4.2.1, and the application/binary-operator spine.
//!
//! Binary operators are parsed right-associatively with no precedence — this
//! reproduces the grammar exactly as specified rather than a conventional
//! precedence table; see the crate-level design notes.

use crate::ast::{Expr, ExprLit, Pattern};
use crate::error::SolisResult;
use crate::token::{Keyword, Literal, Symbol, TokenKind};

use super::Parser;

impl Parser {
    pub fn parse_expression(&mut self) -> SolisResult<Expr> {
        self.parse_expression_impl(false)
    }

    /// Brace-suppressed expression parsing: a bare `{` does not begin a
    /// record/block atom. Used for the disambiguation probe and for
    /// `match`/`if` conditions, so the construct's own closing `{` is not
    /// swallowed as an argument.
    fn parse_non_block_expression(&mut self) -> SolisResult<Expr> {
        self.parse_expression_impl(true)
    }

    fn parse_expression_impl(&mut self, suppress_brace: bool) -> SolisResult<Expr> {
        if self.check_keyword(Keyword::Let) {
            self.parse_let_expr()
        } else if self.check_keyword(Keyword::Match) {
            self.parse_match_expr()
        } else if self.check_keyword(Keyword::If) {
            self.parse_if_expr()
        } else if self.check_symbol(Symbol::Backslash) {
            self.parse_lambda()
        } else if self.check_keyword(Keyword::Do) {
            self.parse_do_block()
        } else {
            self.parse_binop_level(suppress_brace)
        }
    }

    /// `AppExpr`, then an optional binary operator whose right-hand side is
    /// parsed as another full application-level expression — right
    /// associative, no precedence.
    fn parse_binop_level(&mut self, suppress_brace: bool) -> SolisResult<Expr> {
        let left = self.parse_app_expr(suppress_brace)?;
        if let Some(op) = self.match_binop_symbol() {
            let right = self.parse_binop_level(suppress_brace)?;
            Ok(Expr::BinOp(op, Box::new(left), Box::new(right)))
        } else {
            Ok(left)
        }
    }

    fn match_binop_symbol(&mut self) -> Option<String> {
        let sym = match self.peek().kind {
            TokenKind::Symbol(s) => s,
            _ => return None,
        };
        let lexeme = match sym {
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Percent => "%",
            Symbol::EqEq => "==",
            Symbol::NotEq => "!=",
            Symbol::Lt => "<",
            Symbol::Gt => ">",
            Symbol::LtEq => "<=",
            Symbol::GtEq => ">=",
            Symbol::AndAnd => "&&",
            Symbol::OrOr => "||",
            Symbol::PlusPlus => "++",
            Symbol::ColonColon => "::",
            Symbol::Colon => ":",
            Symbol::Pipeline => "|>",
            _ => return None,
        };
        self.advance();
        Some(lexeme.to_string())
    }

    /// Left-associative application fold. A `.field` postfix on the head is
    /// parsed eagerly, ahead of argument gathering.
    fn parse_app_expr(&mut self, suppress_brace: bool) -> SolisResult<Expr> {
        let mut expr = self.parse_atom(suppress_brace)?;
        expr = self.parse_field_accesses(expr)?;
        while self.starts_atom(suppress_brace) {
            let arg = self.parse_atom(suppress_brace)?;
            expr = Expr::App(Box::new(expr), Box::new(arg));
        }
        Ok(expr)
    }

    fn parse_field_accesses(&mut self, mut expr: Expr) -> SolisResult<Expr> {
        while self.match_symbol(Symbol::Dot) {
            let field = self.expect_identifier("after `.`")?;
            expr = Expr::RecordAccess(Box::new(expr), field);
        }
        Ok(expr)
    }

    fn is_signed_numeric_literal_ahead(&self) -> bool {
        matches!(self.peek_at(1).kind, TokenKind::Literal(Literal::Int(_) | Literal::Float(_) | Literal::Big(_)))
    }

    fn starts_atom(&self, suppress_brace: bool) -> bool {
        match &self.peek().kind {
            TokenKind::Literal(_) | TokenKind::Bool(_) | TokenKind::Identifier(_) | TokenKind::Constructor(_) => true,
            TokenKind::Symbol(Symbol::LParen | Symbol::LBracket | Symbol::Bang) => true,
            TokenKind::Symbol(Symbol::LBrace) => !suppress_brace,
            TokenKind::Symbol(Symbol::Minus) => self.is_signed_numeric_literal_ahead(),
            _ => false,
        }
    }

    fn parse_atom(&mut self, suppress_brace: bool) -> SolisResult<Expr> {
        if self.check_symbol(Symbol::Minus) && self.is_signed_numeric_literal_ahead() {
            self.advance();
            let tok = self.advance();
            let TokenKind::Literal(lit) = tok.kind else { unreachable!("lookahead guarantees a literal token") };
            return Ok(Expr::Lit(match lit {
                Literal::Int(n) => ExprLit::Int(-n),
                Literal::Float(f) => ExprLit::Float(-f),
                Literal::Big(b) => ExprLit::Big(-&b),
                Literal::Str(_) => unreachable!("lookahead excludes string literals"),
            }));
        }

        match self.peek().kind.clone() {
            TokenKind::Literal(lit) => {
                self.advance();
                Ok(Expr::Lit(Self::literal_to_expr_lit(lit)))
            }
            TokenKind::Bool(b) => {
                self.advance();
                Ok(Expr::Lit(ExprLit::Bool(b)))
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expr::Var(name))
            }
            TokenKind::Constructor(name) => {
                self.advance();
                Ok(Expr::Var(name))
            }
            TokenKind::Symbol(Symbol::LParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_symbol(Symbol::RParen, "closing parenthesized expression")?;
                Ok(inner)
            }
            TokenKind::Symbol(Symbol::LBracket) => self.parse_list_literal(),
            TokenKind::Symbol(Symbol::LBrace) if !suppress_brace => self.parse_braced_expr(),
            TokenKind::Symbol(Symbol::Bang) => {
                self.advance();
                let operand = self.parse_atom(suppress_brace)?;
                Ok(Expr::Strict(Box::new(operand)))
            }
            _ => Err(self.unexpected("in expression")),
        }
    }

    fn literal_to_expr_lit(lit: Literal) -> ExprLit {
        match lit {
            Literal::Int(n) => ExprLit::Int(n),
            Literal::Float(f) => ExprLit::Float(f),
            Literal::Str(s) => ExprLit::Str(s),
            Literal::Big(b) => ExprLit::Big(b),
        }
    }

    fn parse_list_literal(&mut self) -> SolisResult<Expr> {
        self.expect_symbol(Symbol::LBracket, "starting list literal")?;
        let mut elems = Vec::new();
        if !self.check_symbol(Symbol::RBracket) {
            elems.push(self.parse_expression()?);
            while self.match_symbol(Symbol::Comma) {
                elems.push(self.parse_expression()?);
            }
        }
        self.expect_symbol(Symbol::RBracket, "closing list literal")?;
        Ok(Expr::List(elems))
    }

    fn parse_record_field(&mut self) -> SolisResult<(String, Expr)> {
        let name = self.expect_identifier("in record field")?;
        self.expect_symbol(Symbol::Eq, "after record field name")?;
        let value = self.parse_expression()?;
        Ok((name, value))
    }

    /// Implements §4.2.1: record literal, record update, monadic bind, or
    /// block, decided by one brace-suppressed lookahead element (unless the
    /// brace opens directly on `let`, which always means a block).
    fn parse_braced_expr(&mut self) -> SolisResult<Expr> {
        self.expect_symbol(Symbol::LBrace, "starting braced expression")?;
        if self.match_symbol(Symbol::RBrace) {
            return Ok(Expr::Record(Vec::new()));
        }
        if self.check_keyword(Keyword::Let) {
            return self.parse_block_interior(false);
        }

        let first = self.parse_non_block_expression()?;

        if let Expr::Var(name) = &first {
            if self.match_symbol(Symbol::Eq) {
                let value = self.parse_expression()?;
                let mut fields = vec![(name.clone(), value)];
                while self.match_symbol(Symbol::Comma) {
                    fields.push(self.parse_record_field()?);
                }
                self.expect_symbol(Symbol::RBrace, "closing record literal")?;
                return Ok(Expr::Record(fields));
            }
        }

        if self.match_symbol(Symbol::Pipe) {
            let mut updates = vec![self.parse_record_field()?];
            while self.match_symbol(Symbol::Comma) {
                updates.push(self.parse_record_field()?);
            }
            self.expect_symbol(Symbol::RBrace, "closing record update")?;
            return Ok(Expr::RecordUpdate(Box::new(first), updates));
        }

        if self.match_symbol(Symbol::LeftArrow) {
            let Expr::Var(name) = first else {
                return Err(self.unexpected("monadic bind requires a variable pattern"));
            };
            let action = self.parse_expression()?;
            self.expect_symbol(Symbol::Semi, "after monadic bind action")?;
            let body = self.parse_expression()?;
            self.expect_symbol(Symbol::RBrace, "closing monadic bind")?;
            return Ok(Expr::Bind(Pattern::Var(name), Box::new(action), Box::new(body)));
        }

        let mut stmts = vec![first];
        while self.match_symbol(Symbol::Semi) {
            if self.check_symbol(Symbol::RBrace) {
                break;
            }
            stmts.push(self.parse_block_statement()?);
        }
        self.expect_symbol(Symbol::RBrace, "closing block")?;
        Ok(Expr::Block(stmts, false))
    }

    /// Parses the remainder of a brace-delimited statement sequence, given
    /// the opening `{` has already been consumed. Shared by `do`-blocks, the
    /// `let`-led block shortcut, and C-like `if`/`else` branches.
    fn parse_block_interior(&mut self, is_do: bool) -> SolisResult<Expr> {
        let mut stmts = Vec::new();
        if !self.check_symbol(Symbol::RBrace) {
            stmts.push(self.parse_block_statement()?);
            while self.match_symbol(Symbol::Semi) {
                if self.check_symbol(Symbol::RBrace) {
                    break;
                }
                stmts.push(self.parse_block_statement()?);
            }
        }
        self.expect_symbol(Symbol::RBrace, "closing block")?;
        Ok(Expr::Block(stmts, is_do))
    }

    fn parse_block_statement(&mut self) -> SolisResult<Expr> {
        if self.check_keyword(Keyword::Let) {
            self.advance();
            let pat = self.parse_pattern()?;
            self.expect_symbol(Symbol::Eq, "in block let-statement")?;
            let value = self.parse_expression()?;
            Ok(Expr::Let(pat, Box::new(value), Box::new(Expr::Lit(ExprLit::Bool(true)))))
        } else {
            self.parse_expression()
        }
    }

    fn parse_braced_block(&mut self) -> SolisResult<Expr> {
        self.expect_symbol(Symbol::LBrace, "starting braced block")?;
        self.parse_block_interior(false)
    }

    fn parse_do_block(&mut self) -> SolisResult<Expr> {
        self.expect_keyword(Keyword::Do, "starting do-block")?;
        self.expect_symbol(Symbol::LBrace, "after `do`")?;
        self.parse_block_interior(true)
    }

    /// `let pattern = value (';' | 'in') body`; `body` defaults to the
    /// boolean literal `true` when neither separator follows the value.
    fn parse_let_expr(&mut self) -> SolisResult<Expr> {
        self.expect_keyword(Keyword::Let, "starting let expression")?;
        let pat = self.parse_pattern()?;
        self.expect_symbol(Symbol::Eq, "in let expression")?;
        let value = self.parse_expression()?;
        let body = if self.match_symbol(Symbol::Semi) {
            self.parse_expression()?
        } else if self.match_keyword(Keyword::In) {
            self.parse_expression()?
        } else {
            Expr::Lit(ExprLit::Bool(true))
        };
        Ok(Expr::Let(pat, Box::new(value), Box::new(body)))
    }

    /// `match scrutinee { pat => expr (, pat => expr)* }`.
    fn parse_match_expr(&mut self) -> SolisResult<Expr> {
        self.expect_keyword(Keyword::Match, "starting match expression")?;
        let scrutinee = self.parse_non_block_expression()?;
        self.expect_symbol(Symbol::LBrace, "starting match arms")?;
        let mut arms = Vec::new();
        if !self.check_symbol(Symbol::RBrace) {
            arms.push(self.parse_match_arm()?);
            while self.match_symbol(Symbol::Comma) {
                arms.push(self.parse_match_arm()?);
            }
        }
        self.expect_symbol(Symbol::RBrace, "closing match arms")?;
        Ok(Expr::Match(Box::new(scrutinee), arms))
    }

    fn parse_match_arm(&mut self) -> SolisResult<(Pattern, Expr)> {
        let pat = self.parse_pattern()?;
        self.expect_symbol(Symbol::FatArrow, "after match pattern")?;
        let body = self.parse_expression()?;
        Ok((pat, body))
    }

    /// Functional `if cond then e1 else e2` or C-like `if cond { e1 } else { e2 }`.
    fn parse_if_expr(&mut self) -> SolisResult<Expr> {
        self.expect_keyword(Keyword::If, "starting if expression")?;
        let cond = self.parse_non_block_expression()?;
        if self.match_keyword(Keyword::Then) {
            let then_branch = self.parse_expression()?;
            self.expect_keyword(Keyword::Else, "after then-branch")?;
            let else_branch = self.parse_expression()?;
            Ok(Expr::If(Box::new(cond), Box::new(then_branch), Box::new(else_branch)))
        } else {
            let then_branch = self.parse_braced_block()?;
            self.expect_keyword(Keyword::Else, "after if-branch block")?;
            let else_branch = self.parse_braced_block()?;
            Ok(Expr::If(Box::new(cond), Box::new(then_branch), Box::new(else_branch)))
        }
    }

    /// `\pattern+ -> body`.
    fn parse_lambda(&mut self) -> SolisResult<Expr> {
        self.expect_symbol(Symbol::Backslash, "starting lambda")?;
        let mut params = vec![self.parse_pattern()?];
        while self.starts_primary_pattern() {
            params.push(self.parse_pattern()?);
        }
        self.expect_symbol(Symbol::Arrow, "after lambda parameters")?;
        let body = self.parse_expression()?;
        Ok(Expr::Lambda(params, Box::new(body)))
    }
}
