use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("let", Keyword::Let);
        map.insert("return", Keyword::Return);
        map.insert("fn", Keyword::Fn);
        map.insert("if", Keyword::If);
        map.insert("else", Keyword::Else);
        map.insert("true", Keyword::True);
        map.insert("false", Keyword::False);
        map.insert("int", Keyword::Int);
        map.insert("i32", Keyword::I32);
        map.insert("string", Keyword::String);
        map.insert("bool", Keyword::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Number,
    String,
    Reserved,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    Greater,

    Pipe, // |
    Or,   // ||

    Semicolon,
    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Words the lexer reclassifies from `Identifier` to `Reserved`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Let,
    Return,
    Fn,
    If,
    Else,
    True,
    False,

    // Type names, only meaningful after `:` in an annotation
    Int,
    I32,
    String,
    Bool,
}

impl Keyword {
    pub fn from_literal(literal: &str) -> Option<Keyword> {
        RESERVED_LOOKUP.get(literal).copied()
    }

    pub fn is_type_name(&self) -> bool {
        matches!(
            self,
            Keyword::Int | Keyword::I32 | Keyword::String | Keyword::Bool
        )
    }
}

/// Classifies an identifier-shaped lexeme. Matching is exact and case-sensitive.
pub fn lookup_ident(word: &str) -> TokenKind {
    if RESERVED_LOOKUP.contains_key(word) {
        TokenKind::Reserved
    } else {
        TokenKind::Identifier
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nliteral: {}}}", self.kind, self.literal)
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Returns the keyword for a `Reserved` token.
    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind == TokenKind::Reserved {
            Keyword::from_literal(&self.literal)
        } else {
            None
        }
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Reserved,
            TokenKind::Illegal,
        ]) {
            format!("{} ({})", self.kind, self.literal)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
