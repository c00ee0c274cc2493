//! Error types and error handling for the compiler.
//!
//! This module defines the error types used by the lexer and parser:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and syntax failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! Code generation defines no errors of its own: it assumes a well-formed
//! AST, which the parser guarantees for every node it hands over.

pub mod errors;

#[cfg(test)]
mod tests;
