//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from a [`Lexer`] and keeps two of them in view:
//! the current token and the one after it (peek).
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by reserved word
//! - NUD (null denotation) handlers for prefix expressions
//! - Reserved-word NUD handlers (`fn`, `if`, `true`, `false`)
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::{debug, info};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Keyword, Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, ReservedLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Errors are accumulated rather than returned: a failed statement is
/// recorded in `errors` and parsing resumes at the next statement.
pub struct Parser {
    /// Token source, pulled on demand
    lexer: Lexer,
    current: Token,
    current_pos: Position,
    peek: Token,
    peek_pos: Position,
    /// Number of unclosed `{` up to and including the current token
    brace_depth: usize,
    /// Errors recorded so far, in source order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for reserved words that start an expression
    reserved_lookup: ReservedLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser and primes the current and peek tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let current_pos = lexer.token_start();
        let peek = lexer.next_token();
        let peek_pos = lexer.token_start();

        let mut parser = Parser {
            lexer,
            current,
            current_pos,
            peek,
            peek_pos,
            brace_depth: 0,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            reserved_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        parser.track_braces();
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until EOF.
    ///
    /// Always returns a program. If [`Parser::errors`] is non-empty afterwards the
    /// program only holds the statements that parsed cleanly.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            let block_stmt = self.current_token_is(TokenKind::OpenCurly);
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    debug!("parse error at {}: {}", error.get_position().0, error);
                    self.errors.push(error);
                    self.synchronize(block_stmt);
                }
            }
            self.next_token();
        }

        info!(
            "parsed {} statement(s) with {} error(s)",
            program.statements.len(),
            self.errors.len()
        );
        program
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns the current token.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    pub fn peek_keyword_is(&self, keyword: Keyword) -> bool {
        self.peek.keyword() == Some(keyword)
    }

    /// Shifts peek into current and pulls a new peek token from the lexer.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        let next_pos = self.lexer.token_start();
        self.current = std::mem::replace(&mut self.peek, next);
        self.current_pos = std::mem::replace(&mut self.peek_pos, next_pos);
        self.track_braces();
    }

    fn track_braces(&mut self) {
        match self.current.kind {
            TokenKind::OpenCurly => self.brace_depth += 1,
            TokenKind::CloseCurly => self.brace_depth = self.brace_depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Advances if the peek token is `expected_kind`, otherwise returns an error
    /// naming both kinds and leaves the cursor where it is.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_token_is(expected_kind) {
            self.next_token();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                    literal: self.peek.literal.clone(),
                },
                self.peek_pos,
            ))
        }
    }

    /// Skips past the rest of a failed statement: stops on a `;` or a `}`
    /// outside any block, or on EOF.
    ///
    /// A `}` only ends the statement when the statement is a block, or when
    /// nothing after it continues the expression (`fn() { .. }(x)`,
    /// `if x { .. } else { .. }`).
    fn synchronize(&mut self, block_stmt: bool) {
        loop {
            match self.current.kind {
                TokenKind::EOF => break,
                TokenKind::Semicolon if self.brace_depth == 0 => break,
                TokenKind::CloseCurly
                    if self.brace_depth == 0 && (block_stmt || !self.peek_continues_expr()) =>
                {
                    break
                }
                _ => self.next_token(),
            }
        }
        // `let f = fn() { ... };` leaves the trailing `;` behind the brace
        if self.current_token_is(TokenKind::CloseCurly) && self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
        debug!(
            "resynchronized on {} at offset {}",
            self.current.debug(),
            self.current_pos.0
        );
    }

    fn peek_continues_expr(&self) -> bool {
        self.get_led_handler(self.peek.kind).is_some() || self.peek_keyword_is(Keyword::Else)
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_pos
    }

    /// Returns the binding power of the peek token, `Default` if it has none.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power(self.peek.kind)
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power(self.current.kind)
    }

    fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    pub fn get_stmt_handler(&self, keyword: Keyword) -> Option<StmtHandler> {
        self.stmt_lookup.get(&keyword).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_reserved_handler(&self, keyword: Keyword) -> Option<NUDHandler> {
        self.reserved_lookup.get(&keyword).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix operator
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a null denotation handler for a reserved word.
    pub fn reserved_nud(&mut self, keyword: Keyword, nud_fn: NUDHandler) {
        self.reserved_lookup.insert(keyword, nud_fn);
    }

    /// Registers a statement handler for a reserved word.
    pub fn stmt(&mut self, keyword: Keyword, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

/// Parses source text into a Program.
///
/// This is the main entry point for parsing. The caller must check the
/// returned errors before trusting the program.
///
/// # Returns
///
/// A tuple containing:
/// - The Program (statements that parsed cleanly)
/// - Every error recorded, in source order
pub fn parse(source: &str) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
