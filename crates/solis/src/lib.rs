#![doc = include_str!("../../../README.md")]

pub mod ast;
mod bigint;
mod builtins;
pub mod error;
mod interpreter;
mod lexer;
pub mod module;
pub mod parser;
mod token;
pub mod value;

pub use bigint::BigInt;
pub use error::{Error, ErrorKind, Position, SolisResult};
pub use interpreter::{apply, force, format_value, match_pattern, Interpreter};
pub use lexer::Lexer;
pub use module::{ModuleResolver, NamespaceTable, Symbol};
pub use parser::{parse_expression_from_source, Parser};
pub use token::{Keyword, Literal, Symbol as TokenSymbol, Token, TokenKind};
pub use value::{Env, Environment, FunctionValue, ThunkState, Value, ValueRef};
