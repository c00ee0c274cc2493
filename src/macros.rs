//! Utility macros for the compiler.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `mk_token!` - Creates a Token instance
//! - `mk_literal_handler!` - Creates a lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = mk_token!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! mk_token {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a token whose text is fixed.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer position by the token text's length. Used for
/// operators and delimiters, where the matched text is always the same.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: mk_literal_handler!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! mk_literal_handler {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            lexer.push(mk_token!(
                $kind,
                String::from($value),
                Span {
                    start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
                    end: Position(
                        (lexer.pos + $value.len() as i32) as u32,
                        Rc::clone(&lexer.file)
                    )
                }
            ));
            lexer.advance_n($value.len().try_into().unwrap());
        }
    };
}
