#![allow(clippy::module_inception)]

use crate::errors::errors::Error;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod parser;
pub mod repl;

pub use parser::parser::parse;

/// Character offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub u32);

impl From<usize> for Position {
    /// Offsets past `u32::MAX` saturate.
    fn from(offset: usize) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX))
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the line text (without its newline) and
/// the column of `position` within that line. A position at or past
/// the end of the source points just after the last character.
pub fn get_line_at_position(source: &str, position: Position) -> (usize, String, usize) {
    let chars: Vec<char> = source.chars().collect();
    let pos = (position.0 as usize).min(chars.len());

    let mut start = 0;
    let mut line_number = 1;

    for (i, c) in chars.iter().enumerate() {
        if i == pos {
            break;
        }
        if *c == '\n' {
            start = i + 1;
            line_number += 1;
        }
    }

    let line: String = chars[start..]
        .iter()
        .take_while(|c| **c != '\n')
        .collect();

    (line_number, line, pos - start)
}


/// Formats an error with the offending source line and a caret under it.
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: name (message)
        -> input.sp
          |
        2 | let b = #;
          | --------^
    */

    let (line, line_text, line_pos) = get_line_at_position(source, *error.get_position());

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error));
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (string.chars().skip(start).collect(), start)
}
