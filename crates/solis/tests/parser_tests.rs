//! Parser-level tests covering declarations, the brace-disambiguation
//! rules of the expression grammar, and right-associative operators.

use solis::ast::{Decl, Expr, ExprLit};
use solis::{parse_expression_from_source, Lexer, Parser};

fn parse_expr(source: &str) -> Expr {
    parse_expression_from_source(source).unwrap_or_else(|e| panic!("unexpected parse failure: {e}"))
}

#[test]
fn empty_list_and_record_literals() {
    assert_eq!(parse_expr("[]"), Expr::List(vec![]));
    assert_eq!(parse_expr("{}"), Expr::Record(vec![]));
}

#[test]
fn signed_numeric_literal_is_not_unary_minus() {
    assert_eq!(parse_expr("-5"), Expr::Lit(ExprLit::Int(-5)));
}

#[test]
fn binary_operators_are_right_associative_with_no_precedence() {
    let expr = parse_expr("x + y * z");
    let Expr::BinOp(op, _, rhs) = expr else { panic!("expected a BinOp") };
    assert_eq!(op, "+");
    assert!(matches!(*rhs, Expr::BinOp(ref inner_op, _, _) if inner_op == "*"));
}

#[test]
fn braced_expr_disambiguates_record_literal() {
    let expr = parse_expr("{ x = 1, y = 2 }");
    assert!(matches!(expr, Expr::Record(fields) if fields.len() == 2));
}

#[test]
fn braced_expr_disambiguates_record_update() {
    let expr = parse_expr("{ r | x = 1 }");
    assert!(matches!(expr, Expr::RecordUpdate(_, updates) if updates.len() == 1));
}

#[test]
fn braced_expr_disambiguates_monadic_bind() {
    let expr = parse_expr("{ x <- action; body }");
    assert!(matches!(expr, Expr::Bind(..)));
}

#[test]
fn braced_expr_disambiguates_plain_block() {
    let expr = parse_expr("{ 1; 2; 3 }");
    assert!(matches!(expr, Expr::Block(stmts, false) if stmts.len() == 3));
}

#[test]
fn let_without_semicolon_or_in_defaults_to_true() {
    let expr = parse_expr("let x = 1");
    let Expr::Let(_, _, body) = expr else { panic!("expected Let") };
    assert_eq!(*body, Expr::Lit(ExprLit::Bool(true)));
}

#[test]
fn function_declaration_parameter_parsing_stops_at_colon() {
    let tokens = Lexer::new("let f x : Int = x").tokenize();
    let mut parser = Parser::new(tokens);
    let decl = parser.parse_declaration().unwrap();
    let Decl::Function(f) = decl else { panic!("expected a function declaration") };
    assert_eq!(f.params.len(), 1);
    assert!(f.type_annotation.is_some());
}

#[test]
fn module_resynchronizes_past_a_bad_declaration() {
    let tokens = Lexer::new("let x = @@@ ;\nlet y = 2").tokenize();
    let mut parser = Parser::new(tokens);
    let module = parser.parse_module();
    assert_eq!(module.declarations.len(), 1);
    assert!(matches!(&module.declarations[0], Decl::Function(f) if f.name == "y"));
}

#[test]
fn data_declaration_parses_variants() {
    let tokens = Lexer::new("data Maybe a = Just a | Nothing").tokenize();
    let mut parser = Parser::new(tokens);
    let decl = parser.parse_declaration().unwrap();
    let Decl::Type(t) = decl else { panic!("expected a type declaration") };
    assert_eq!(t.name, "Maybe");
    let solis::ast::TypeRhs::Variants(variants) = t.rhs else { panic!("expected variants") };
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].0, "Just");
    assert_eq!(variants[0].1.len(), 1);
    assert_eq!(variants[1].0, "Nothing");
    assert!(variants[1].1.is_empty());
}
