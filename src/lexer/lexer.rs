use crate::{Position, MK_TOKEN};

use super::tokens::{lookup_ident, Token, TokenKind};

/// Pull-based lexer. Each call to [`Lexer::next_token`] reads just enough
/// characters to produce one token; the cursor only ever moves forward.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: Vec<char>,
    /// Index of `ch`
    pos: usize,
    /// Index of the character after `ch`
    read_pos: usize,
    ch: Option<char>,
    token_start: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.chars().collect(),
            pos: 0,
            read_pos: 0,
            ch: None,
            token_start: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Offset of the first character of the most recently produced token.
    pub fn token_start(&self) -> Position {
        Position::from(self.token_start)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_start = self.pos;

        let ch = match self.ch {
            Some(ch) => ch,
            None => return MK_TOKEN!(TokenKind::EOF, ""),
        };

        let token = match ch {
            '=' => self.either('=', TokenKind::Equals, TokenKind::Assignment),
            '!' => self.either('=', TokenKind::NotEquals, TokenKind::Not),
            '|' => self.either('|', TokenKind::Or, TokenKind::Pipe),
            '+' => MK_TOKEN!(TokenKind::Plus, "+"),
            '-' => MK_TOKEN!(TokenKind::Dash, "-"),
            '*' => MK_TOKEN!(TokenKind::Star, "*"),
            '/' => MK_TOKEN!(TokenKind::Slash, "/"),
            '<' => MK_TOKEN!(TokenKind::Less, "<"),
            '>' => MK_TOKEN!(TokenKind::Greater, ">"),
            ';' => MK_TOKEN!(TokenKind::Semicolon, ";"),
            ':' => MK_TOKEN!(TokenKind::Colon, ":"),
            ',' => MK_TOKEN!(TokenKind::Comma, ","),
            '{' => MK_TOKEN!(TokenKind::OpenCurly, "{"),
            '}' => MK_TOKEN!(TokenKind::CloseCurly, "}"),
            '[' => MK_TOKEN!(TokenKind::OpenBracket, "["),
            ']' => MK_TOKEN!(TokenKind::CloseBracket, "]"),
            '(' => MK_TOKEN!(TokenKind::OpenParen, "("),
            ')' => MK_TOKEN!(TokenKind::CloseParen, ")"),
            '"' => return self.read_string(),
            c if is_letter(c) => {
                let word = self.read_while(is_identifier_char);
                return MK_TOKEN!(lookup_ident(&word), word);
            }
            c if c.is_ascii_digit() => {
                let digits = self.read_while(|c| c.is_ascii_digit());
                return MK_TOKEN!(TokenKind::Number, digits);
            }
            c => MK_TOKEN!(TokenKind::Illegal, c.to_string()),
        };

        self.read_char();
        token
    }

    fn read_char(&mut self) {
        self.ch = self.source.get(self.read_pos).copied();
        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.source.get(self.read_pos).copied()
    }

    /// Two-character operator if the next character is `second`, otherwise the
    /// single-character form. Leaves `ch` on the last character consumed.
    fn either(&mut self, second: char, double: TokenKind, single: TokenKind) -> Token {
        let first = self.ch.unwrap_or_default();
        if self.peek_char() == Some(second) {
            self.read_char();
            MK_TOKEN!(double, format!("{}{}", first, second))
        } else {
            MK_TOKEN!(single, first.to_string())
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    fn read_while(&mut self, predicate: fn(char) -> bool) -> String {
        let start = self.pos;
        while self.ch.is_some_and(predicate) {
            self.read_char();
        }
        self.source[start..self.pos].iter().collect()
    }

    fn read_string(&mut self) -> Token {
        let start = self.pos;
        self.read_char();

        while let Some(ch) = self.ch {
            if ch == '"' {
                let value: String = self.source[start + 1..self.pos].iter().collect();
                self.read_char();
                return MK_TOKEN!(TokenKind::String, value);
            }
            self.read_char();
        }

        // Ran off the end without a closing quote
        let fragment: String = self.source[start..self.pos].iter().collect();
        MK_TOKEN!(TokenKind::Illegal, fragment)
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, `EOF`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    is_letter(c) || c.is_ascii_digit()
}

/// Lexes the whole source, including the single trailing `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens: Vec<Token> = lexer.by_ref().collect();
    tokens.push(lexer.next_token());
    tokens
}
