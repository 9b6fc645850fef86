use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayExpr, BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, IndexExpr,
            InfixExpr, NumberExpr, PrefixExpr, StringExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Keyword, TokenKind},
};

use super::{
    lookups::BindingPower,
    parser::Parser,
    stmt::parse_block_stmt,
    types::skip_type_annotation,
};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// Starts on the first token of the expression and finishes on its last.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token = parser.current_token();
    let nud = match parser.get_nud_handler(token.kind) {
        Some(nud) => nud,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixParseFn {
                    kind: token.kind,
                    literal: token.literal.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, keep folding into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let led = match parser.get_led_handler(parser.peek_token().kind) {
            Some(led) => led,
            None => return Ok(left),
        };

        parser.next_token();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Number => match token.literal.parse::<i32>() {
            Ok(value) => Ok(Expr::Number(NumberExpr { token, value })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError {
                    literal: token.literal,
                },
                parser.get_position(),
            )),
        },
        TokenKind::String => Ok(Expr::String(StringExpr {
            value: token.literal.clone(),
            token,
        })),
        _ => Ok(Expr::Identifier(parse_identifier(parser)?)),
    }
}

/// Parses the current token as a bare identifier.
pub fn parse_identifier(parser: &mut Parser) -> Result<IdentifierExpr, Error> {
    let token = parser.current_token().clone();
    if token.kind != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: token.kind,
                literal: token.literal,
            },
            parser.get_position(),
        ));
    }

    Ok(IdentifierExpr {
        value: token.literal.clone(),
        token,
    })
}

/// Dispatches a reserved word that starts an expression.
pub fn parse_reserved_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();
    let handler = token
        .keyword()
        .and_then(|keyword| parser.get_reserved_handler(keyword));

    match handler {
        Some(handler) => handler(parser),
        None => Err(Error::new(
            ErrorImpl::UnknownReservedWord {
                word: token.literal.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanExpr {
        value: token.keyword() == Some(Keyword::True),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.next_token();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    // Same binding power on the right keeps equal-precedence operators left-associative
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.next_token();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let elements = parse_delimited(parser, TokenKind::CloseBracket, parse_list_item)?;

    Ok(Expr::Array(ArrayExpr { token, elements }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_delimited(parser, TokenKind::CloseParen, parse_list_item)?;

    Ok(Expr::Call(CallExpr {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    parser.next_token();
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseBracket)?;

    Ok(Expr::Index(IndexExpr {
        token,
        left: Box::new(left),
        index: Box::new(index),
    }))
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (x < y) { x } else { y }
    let token = parser.current_token().clone();
    parser.next_token();
    let condition = parse_expr(parser, BindingPower::Default)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_keyword_is(Keyword::Else) {
        parser.next_token();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // fn(x: int, y) : int { x + y }
    let token = parser.current_token().clone();
    parser.expect_peek(TokenKind::OpenParen)?;

    let parameters = parse_delimited(parser, TokenKind::CloseParen, parse_parameter)?;
    skip_type_annotation(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

fn parse_list_item(parser: &mut Parser) -> Result<Expr, Error> {
    parse_expr(parser, BindingPower::Default)
}

fn parse_parameter(parser: &mut Parser) -> Result<IdentifierExpr, Error> {
    let parameter = parse_identifier(parser)?;
    skip_type_annotation(parser)?;
    Ok(parameter)
}

/// Parses a comma separated list that closes with `end`.
///
/// Starts on the opening delimiter and finishes on `end`. `item` is called
/// with the first token of each element as the current token.
pub fn parse_delimited<T>(
    parser: &mut Parser,
    end: TokenKind,
    item: fn(&mut Parser) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    let mut items = vec![];

    if parser.peek_token_is(end) {
        parser.next_token();
        return Ok(items);
    }

    parser.next_token();
    items.push(item(parser)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        items.push(item(parser)?);
    }

    parser.expect_peek(end)?;

    Ok(items)
}
