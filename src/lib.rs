#![allow(clippy::module_inception)]

use std::{path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod codegen;
pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Locates the line containing a byte offset in the given source text.
///
/// Returns the 1-based line number, the line's text and the 0-based
/// column of the offset within that line. Offsets past the end of the
/// source are clamped to the last line, so errors reported at EOF still
/// point at something printable.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    if source.is_empty() {
        return (1, String::new(), 0);
    }

    let pos = (position as usize).min(source.len() - 1);

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    // The clamped offset sits on the final newline
    let last = source.split_inclusive('\n').last().unwrap_or("");
    (line_number - 1, last.to_string(), last.len())
}

pub fn display_error(error: &Error, file: &Path, source: &str) {
    /*
        error: message
        -> program.lazy
           |
        20 | lazy a = #;
           | ---------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
