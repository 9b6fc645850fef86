use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_identifier},
    lookups::BindingPower,
    parser::Parser,
    types::skip_type_annotation,
};

/// Parses one statement starting at the current token.
///
/// Finishes on the statement's last token (its `;` when one is present).
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser
        .current_token()
        .keyword()
        .and_then(|keyword| parser.get_stmt_handler(keyword));

    if let Some(handler) = handler {
        return handler(parser);
    }

    if parser.current_token_is(TokenKind::OpenCurly) {
        return Ok(Stmt::Block(parse_block_stmt(parser)?));
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // let x: int = 5;
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = parse_identifier(parser)?;

    skip_type_annotation(parser)?;

    parser.expect_peek(TokenKind::Assignment)?;
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let value = if parser.peek_token_is(TokenKind::Semicolon)
        || parser.peek_token_is(TokenKind::CloseCurly)
        || parser.peek_token_is(TokenKind::EOF)
    {
        None
    } else {
        parser.next_token();
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

/// Parses `{ ... }` starting on the `{`.
///
/// Finishes on the closing `}`, or on EOF if the block is never closed.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.next_token();

    let mut statements = Vec::new();
    while !parser.current_token_is(TokenKind::CloseCurly)
        && !parser.current_token_is(TokenKind::EOF)
    {
        statements.push(parse_stmt(parser)?);
        parser.next_token();
    }

    Ok(BlockStmt { token, statements })
}
