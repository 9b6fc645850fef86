//! Unit tests for AST rendering and defining tokens.

use super::{
    ast::{Expr, Node, Program, Stmt},
    expressions::{
        ArrayExpr, BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, IndexExpr,
        InfixExpr, NumberExpr, PrefixExpr, StringExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};
use crate::{lexer::tokens::TokenKind, MK_TOKEN};

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        token: MK_TOKEN!(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

fn number(value: i32) -> Expr {
    Expr::Number(NumberExpr {
        token: MK_TOKEN!(TokenKind::Number, value.to_string()),
        value,
    })
}

fn infix(left: Expr, operator: &str, right: Expr, kind: TokenKind) -> Expr {
    Expr::Infix(InfixExpr {
        token: MK_TOKEN!(kind, operator),
        left: Box::new(left),
        operator: operator.to_string(),
        right: Box::new(right),
    })
}

fn block(statements: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        token: MK_TOKEN!(TokenKind::OpenCurly, "{"),
        statements,
    }
}

fn expression(expression: Expr) -> Stmt {
    Stmt::Expression(ExpressionStmt { expression })
}

#[test]
fn test_let_rendering() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            token: MK_TOKEN!(TokenKind::Reserved, "let"),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_rendering() {
    let with_value = ReturnStmt {
        token: MK_TOKEN!(TokenKind::Reserved, "return"),
        value: Some(number(5)),
    };
    let without_value = ReturnStmt {
        token: MK_TOKEN!(TokenKind::Reserved, "return"),
        value: None,
    };

    assert_eq!(with_value.to_string(), "return 5;");
    assert_eq!(without_value.to_string(), "return;");
}

#[test]
fn test_literal_rendering() {
    let string = Expr::String(StringExpr {
        token: MK_TOKEN!(TokenKind::String, "hi there"),
        value: "hi there".to_string(),
    });
    let boolean = Expr::Boolean(BooleanExpr {
        token: MK_TOKEN!(TokenKind::Reserved, "false"),
        value: false,
    });
    let padded = Expr::Number(NumberExpr {
        token: MK_TOKEN!(TokenKind::Number, "007"),
        value: 7,
    });

    assert_eq!(string.to_string(), "\"hi there\"");
    assert_eq!(string.token_literal(), "hi there");
    assert_eq!(boolean.to_string(), "false");
    assert_eq!(padded.to_string(), "007");
}

#[test]
fn test_operator_rendering() {
    let prefix = Expr::Prefix(PrefixExpr {
        token: MK_TOKEN!(TokenKind::Dash, "-"),
        operator: "-".to_string(),
        right: Box::new(number(5)),
    });
    let sum = infix(prefix, "+", number(3), TokenKind::Plus);

    assert_eq!(sum.to_string(), "((-5) + 3)");
    assert_eq!(sum.token_literal(), "+");
}

#[test]
fn test_collection_rendering() {
    let array = Expr::Array(ArrayExpr {
        token: MK_TOKEN!(TokenKind::OpenBracket, "["),
        elements: vec![number(1), infix(number(2), "*", number(3), TokenKind::Star)],
    });
    let index = Expr::Index(IndexExpr {
        token: MK_TOKEN!(TokenKind::OpenBracket, "["),
        left: Box::new(array.clone()),
        index: Box::new(number(0)),
    });
    let call = Expr::Call(CallExpr {
        token: MK_TOKEN!(TokenKind::OpenParen, "("),
        callee: Box::new(Expr::Identifier(ident("len"))),
        arguments: vec![index.clone(), Expr::Identifier(ident("x"))],
    });

    assert_eq!(array.to_string(), "[1, (2 * 3)]");
    assert_eq!(index.to_string(), "([1, (2 * 3)][0])");
    assert_eq!(call.to_string(), "len(([1, (2 * 3)][0]), x)");
    assert_eq!(call.token_literal(), "(");
}

#[test]
fn test_function_rendering() {
    let function = Expr::Function(FunctionExpr {
        token: MK_TOKEN!(TokenKind::Reserved, "fn"),
        parameters: vec![ident("a"), ident("b")],
        body: block(vec![expression(infix(
            Expr::Identifier(ident("a")),
            "+",
            Expr::Identifier(ident("b")),
            TokenKind::Plus,
        ))]),
    });
    let empty = Expr::Function(FunctionExpr {
        token: MK_TOKEN!(TokenKind::Reserved, "fn"),
        parameters: vec![],
        body: block(vec![]),
    });

    assert_eq!(function.to_string(), "fn(a, b) { (a + b) }");
    assert_eq!(empty.to_string(), "fn() {}");
}

#[test]
fn test_if_rendering() {
    let condition = infix(
        Expr::Identifier(ident("x")),
        "<",
        Expr::Identifier(ident("y")),
        TokenKind::Less,
    );
    let grouped = IfExpr {
        token: MK_TOKEN!(TokenKind::Reserved, "if"),
        condition: Box::new(condition),
        consequence: block(vec![expression(Expr::Identifier(ident("x")))]),
        alternative: Some(block(vec![expression(Expr::Identifier(ident("y")))])),
    };
    let bare = IfExpr {
        token: MK_TOKEN!(TokenKind::Reserved, "if"),
        condition: Box::new(Expr::Identifier(ident("ready"))),
        consequence: block(vec![]),
        alternative: None,
    };

    assert_eq!(grouped.to_string(), "if(x < y) { x } else { y }");
    assert_eq!(bare.to_string(), "if ready {}");
}

#[test]
fn test_statement_separators() {
    let program = Program {
        statements: vec![
            expression(Expr::Identifier(ident("a"))),
            expression(number(1)),
            Stmt::Block(block(vec![
                expression(Expr::Identifier(ident("b"))),
                expression(Expr::Identifier(ident("c"))),
            ])),
            expression(Expr::Identifier(ident("d"))),
        ],
    };

    assert_eq!(program.to_string(), "a; 1; { b; c } d");
}

#[test]
fn test_expression_statement_reports_expression_token() {
    let stmt = expression(infix(number(1), "*", number(2), TokenKind::Star));
    assert_eq!(stmt.token_literal(), "*");
}

#[test]
fn test_empty_program_token_literal() {
    assert_eq!(Program::default().token_literal(), "");
}
