//! Lexical analysis: source text → finite token stream.
//!
//! A single left-to-right scan. Before each token the scanner skips
//! whitespace, line comments (`//`, `--`) and non-nesting block comments
//! (`/* … */`). The lexer never fails outright: unterminated literals and a
//! lone `&` are embedded as [`TokenKind::Error`] tokens, which the parser
//! turns into a fatal [`crate::error::Error`] at that token's position.

use crate::bigint::BigInt;
use crate::error::Position;
use crate::token::{Keyword, Literal, Symbol, Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self { chars: source.chars().collect(), pos: 0, line: 1, column: 1 }
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia();
            let start = self.position();
            let Some(c) = self.peek() else {
                tokens.push(Token::new(TokenKind::Eof, "", start));
                break;
            };
            let token = if c.is_ascii_digit() {
                self.lex_number(start)
            } else if c == '"' {
                self.lex_string(start)
            } else if c == '\'' {
                self.lex_char(start)
            } else if c.is_alphabetic() || c == '_' {
                self.lex_word(start)
            } else {
                self.lex_symbol(start)
            };
            tokens.push(token);
        }
        tokens
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn matches(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_at(1) == Some('/') => self.skip_line_comment(),
                Some('-') if self.peek_at(1) == Some('-') => self.skip_line_comment(),
                Some('/') if self.peek_at(1) == Some('*') => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '*'
        loop {
            match self.peek() {
                None => break,
                Some('*') if self.peek_at(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn lex_number(&mut self, start: Position) -> Token {
        let begin = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let mut is_float = false;
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
            // exponent is only recognized once a decimal point has made this a float
            if matches!(self.peek(), Some('e' | 'E')) {
                let mut lookahead = 1;
                if matches!(self.peek_at(lookahead), Some('+' | '-')) {
                    lookahead += 1;
                }
                if self.peek_at(lookahead).is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                    if matches!(self.peek(), Some('+' | '-')) {
                        self.advance();
                    }
                    while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                        self.advance();
                    }
                }
            }
        }
        let text: String = self.chars[begin..self.pos].iter().collect();
        if !is_float && self.peek() == Some('n') {
            self.advance();
            let lexeme: String = self.chars[begin..self.pos].iter().collect();
            let Some(big) = BigInt::from_decimal_str(&text) else {
                return Token::new(TokenKind::Error(format!("invalid big integer literal `{lexeme}`")), lexeme, start);
            };
            return Token::new(TokenKind::Literal(Literal::Big(big)), lexeme, start);
        }
        if is_float {
            let value: f64 = text.parse().unwrap_or(f64::NAN);
            return Token::new(TokenKind::Literal(Literal::Float(value)), text, start);
        }
        match text.parse::<i64>() {
            Ok(value) => Token::new(TokenKind::Literal(Literal::Int(value)), text, start),
            Err(_) => Token::new(TokenKind::Error(format!("integer literal `{text}` out of range")), text, start),
        }
    }

    fn lex_word(&mut self, start: Position) -> Token {
        let begin = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '\'') {
            self.advance();
        }
        let text: String = self.chars[begin..self.pos].iter().collect();
        if let Some(kw) = Keyword::lookup(&text) {
            if kw == Keyword::True {
                return Token::new(TokenKind::Bool(true), text, start);
            }
            if kw == Keyword::False {
                return Token::new(TokenKind::Bool(false), text, start);
            }
            return Token::new(TokenKind::Keyword(kw), text, start);
        }
        let first = text.chars().next().expect("lex_word always consumes at least one char");
        if first.is_uppercase() {
            Token::new(TokenKind::Constructor(text.clone()), text, start)
        } else {
            Token::new(TokenKind::Identifier(text.clone()), text, start)
        }
    }

    fn lex_string(&mut self, start: Position) -> Token {
        self.advance(); // opening quote
        let mut value = String::new();
        loop {
            match self.peek() {
                None => {
                    return Token::new(TokenKind::Error("unterminated string literal".into()), value, start);
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.advance() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('r') => value.push('\r'),
                        Some('\\') => value.push('\\'),
                        Some('"') => value.push('"'),
                        Some(other) => value.push(other),
                        None => {
                            return Token::new(TokenKind::Error("unterminated string literal".into()), value, start);
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    value.push(c);
                }
            }
        }
        let lexeme = value.clone();
        Token::new(TokenKind::Literal(Literal::Str(value)), lexeme, start)
    }

    fn lex_char(&mut self, start: Position) -> Token {
        self.advance(); // opening quote
        let ch = match self.peek() {
            Some('\\') => {
                self.advance();
                self.advance().unwrap_or('\0')
            }
            Some(c) => {
                self.advance();
                c
            }
            None => {
                return Token::new(TokenKind::Error("unterminated character literal".into()), "", start);
            }
        };
        if self.peek() != Some('\'') {
            return Token::new(TokenKind::Error("unterminated character literal".into()), ch.to_string(), start);
        }
        self.advance();
        let text = ch.to_string();
        Token::new(TokenKind::Literal(Literal::Str(text.clone())), text, start)
    }

    fn lex_symbol(&mut self, start: Position) -> Token {
        let c = self.advance().expect("lex_symbol called with a pending character");
        let (kind, len): (TokenKind, usize) = match c {
            '+' if self.matches('+') => (TokenKind::Symbol(Symbol::PlusPlus), 2),
            '+' => (TokenKind::Symbol(Symbol::Plus), 1),
            '-' if self.matches('>') => (TokenKind::Symbol(Symbol::Arrow), 2),
            '-' => (TokenKind::Symbol(Symbol::Minus), 1),
            '*' => (TokenKind::Symbol(Symbol::Star), 1),
            '/' => (TokenKind::Symbol(Symbol::Slash), 1),
            '%' => (TokenKind::Symbol(Symbol::Percent), 1),
            '=' if self.matches('=') => (TokenKind::Symbol(Symbol::EqEq), 2),
            '=' if self.matches('>') => (TokenKind::Symbol(Symbol::FatArrow), 2),
            '=' => (TokenKind::Symbol(Symbol::Eq), 1),
            '!' if self.matches('=') => (TokenKind::Symbol(Symbol::NotEq), 2),
            '!' => (TokenKind::Symbol(Symbol::Bang), 1),
            '<' if self.matches('=') => (TokenKind::Symbol(Symbol::LtEq), 2),
            '<' if self.matches('-') => (TokenKind::Symbol(Symbol::LeftArrow), 2),
            '<' => (TokenKind::Symbol(Symbol::Lt), 1),
            '>' if self.matches('=') => (TokenKind::Symbol(Symbol::GtEq), 2),
            '>' => (TokenKind::Symbol(Symbol::Gt), 1),
            '&' if self.matches('&') => (TokenKind::Symbol(Symbol::AndAnd), 2),
            '&' => return Token::new(TokenKind::Error("stray `&` (did you mean `&&`?)".into()), "&", start),
            '|' if self.matches('|') => (TokenKind::Symbol(Symbol::OrOr), 2),
            '|' if self.matches('>') => (TokenKind::Symbol(Symbol::Pipeline), 2),
            '|' => (TokenKind::Symbol(Symbol::Pipe), 1),
            ':' if self.matches(':') => (TokenKind::Symbol(Symbol::ColonColon), 2),
            ':' => (TokenKind::Symbol(Symbol::Colon), 1),
            '.' => (TokenKind::Symbol(Symbol::Dot), 1),
            '@' => (TokenKind::Symbol(Symbol::At), 1),
            '\\' => (TokenKind::Symbol(Symbol::Backslash), 1),
            '(' => (TokenKind::Symbol(Symbol::LParen), 1),
            ')' => (TokenKind::Symbol(Symbol::RParen), 1),
            '[' => (TokenKind::Symbol(Symbol::LBracket), 1),
            ']' => (TokenKind::Symbol(Symbol::RBracket), 1),
            '{' => (TokenKind::Symbol(Symbol::LBrace), 1),
            '}' => (TokenKind::Symbol(Symbol::RBrace), 1),
            ',' => (TokenKind::Symbol(Symbol::Comma), 1),
            ';' => (TokenKind::Symbol(Symbol::Semi), 1),
            other => {
                return Token::new(TokenKind::Error(format!("unrecognized character `{other}`")), other.to_string(), start);
            }
        };
        let lexeme: String = self.chars[self.pos - len..self.pos].iter().collect();
        Token::new(kind, lexeme, start)
    }
}
