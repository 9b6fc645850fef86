//! Type annotation handling.
//!
//! Annotations (`: <type-name>`) may follow a `let` name, a function
//! parameter or a parameter list. They are recognised and skipped; nothing
//! downstream consumes types, so they are not kept in the AST.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// Skips `: <type-name>` if the peek token is a `:`.
///
/// Leaves the cursor on the type name when an annotation was present,
/// otherwise does nothing.
pub fn skip_type_annotation(parser: &mut Parser) -> Result<bool, Error> {
    if !parser.peek_token_is(TokenKind::Colon) {
        return Ok(false);
    }
    parser.next_token();

    if !is_type_name(parser.peek_token()) {
        let found = parser.peek_token();
        let error = ErrorImpl::ExpectedTypeName {
            found: found.kind,
            literal: found.literal.clone(),
        };
        parser.next_token();
        return Err(Error::new(error, parser.get_position()));
    }
    parser.next_token();

    Ok(true)
}

/// User-defined names are accepted as well as the built-in type keywords.
pub fn is_type_name(token: &Token) -> bool {
    match token.kind {
        TokenKind::Identifier => true,
        TokenKind::Reserved => token.keyword().is_some_and(|k| k.is_type_name()),
        _ => false,
    }
}
