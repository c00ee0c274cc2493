//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts lazyLang
//! source code into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, number literals and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! Unrecognized characters become `Illegal` tokens rather than aborting
//! the scan; rejecting them is the parser's job.

pub mod lexer;
pub mod tokens;
