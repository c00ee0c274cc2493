//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (bindings, conditionals, loops, print)
//! - Expression parsing (binary ops, index access, literals)
//! - Error recovery and reporting
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.
//!
//! A failed statement never vanishes silently: the parser records a
//! positioned diagnostic, resynchronizes at the next statement boundary
//! and keeps going, so the caller gets a partial AST plus every error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
