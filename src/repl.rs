//! Line-oriented interactive driver.
//!
//! Reads one line at a time, parses it on its own and echoes either the
//! canonical rendering of the program or the parse errors.

use std::io::{self, BufRead, Write};

use log::info;

use crate::{errors::errors::Error, get_line_at_position, parse};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Written before each line is read
    pub prompt: String,
    /// Follow each error with the source line and a caret under the offending token
    pub point_errors: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: String::from(PROMPT),
            point_errors: false,
        }
    }
}

/// Runs the REPL until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(input: R, mut output: W, config: &ReplConfig) -> io::Result<()> {
    info!("repl started");
    let mut lines = input.lines();

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let (program, errors) = parse(&line);
        if !errors.is_empty() {
            print_parser_errors(&mut output, &errors, &line, config)?;
            continue;
        }

        writeln!(output, "{}", program)?;
    }

    info!("repl input exhausted");
    Ok(())
}

fn print_parser_errors<W: Write>(
    output: &mut W,
    errors: &[Error],
    line: &str,
    config: &ReplConfig,
) -> io::Result<()> {
    writeln!(output, "Parse failed!")?;
    writeln!(output, " parser errors:")?;
    for error in errors {
        writeln!(output, "\t{}", error)?;
        if config.point_errors {
            let (_, text, column) = get_line_at_position(line, *error.get_position());
            writeln!(output, "\t  {}", text)?;
            writeln!(output, "\t  {:>width$}", "^", width = column + 1)?;
        }
    }
    Ok(())
}
