//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into tokens on
//! demand. It handles:
//!
//! - Recognition of reserved words, identifiers, numbers and strings
//! - One-character lookahead for `==`, `!=` and `||`
//! - Degrading unrecognised input to `Illegal` tokens instead of failing

pub mod lexer;
pub mod tokens;
