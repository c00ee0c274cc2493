//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Parsing is a pure function of the token stream: no file or process
//! state is consulted, which is what lets the diagnostics façade reuse
//! the same entry point for whole-document checks.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and maintains lookup tables for
/// parsing statements and expressions. It tracks the current position in
/// the token stream and accumulates recovery diagnostics.
pub struct Parser {
    /// The list of tokens to parse, always terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Diagnostics collected while recovering from bad statements
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse
    /// * `file` - Reference-counted string containing the source file name
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos as usize).unwrap().kind
    }

    /// Advances to the next token and returns the consumed token.
    /// Never advances past the trailing EOF token.
    pub fn advance(&mut self) -> &Token {
        if (self.pos as usize) < self.tokens.len() - 1 {
            self.pos += 1;
            self.tokens.get((self.pos - 1) as usize).unwrap()
        } else {
            self.tokens.get(self.pos as usize).unwrap()
        }
    }

    /// Expects a token of the specified kind, consuming it on success.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// expected-vs-found Error positioned at the offending token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    found: token.value.clone(),
                },
                token.span.start.clone(),
            ))
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Records a recovery diagnostic.
    pub fn report(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Skips tokens until a plausible statement boundary: just past a `;`,
    /// at a closing `}` (left for the enclosing block to consume), at the
    /// next statement keyword, or at EOF.
    ///
    /// Progress is guaranteed: statement dispatch always consumes the
    /// leading token, and this loop advances over everything else.
    pub fn synchronize(&mut self) {
        while self.current_token_kind() != TokenKind::EOF {
            match self.current_token_kind() {
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                TokenKind::CloseCurly => return,
                kind if self.stmt_lookup.contains_key(&kind) => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .insert(kind, BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup
            .insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the byte position of the current token in the source file.
    pub fn get_position(&self) -> Position {
        Position(self.current_token().span.start.0, Rc::clone(&self.file))
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses all statements until EOF.
/// When a statement fails, its diagnostic is recorded and parsing resumes
/// at the next statement boundary, so a malformed statement costs exactly
/// one diagnostic instead of the rest of the program.
///
/// # Returns
///
/// A tuple containing:
/// - The parsed Program (partial when diagnostics are non-empty)
/// - The list of positioned diagnostics, empty on full success
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let mut statements = vec![];

    while parser.has_tokens() {
        match parse_stmt(&mut parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.report(error);
                parser.synchronize();
            }
        }
    }

    (Program { statements }, parser.errors)
}
