use std::rc::Rc;

use regex::Regex;

use crate::{mk_literal_handler, mk_token, Position, Span};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            // Two-character operators are listed before their one-character
            // fallbacks so `==` never lexes as two `=` tokens.
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: mk_literal_handler!(TokenKind::OpenBracket, "[") },
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: mk_literal_handler!(TokenKind::CloseBracket, "]") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: mk_literal_handler!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: mk_literal_handler!(TokenKind::CloseCurly, "}") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: mk_literal_handler!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: mk_literal_handler!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: mk_literal_handler!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: mk_literal_handler!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: mk_literal_handler!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: mk_literal_handler!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: mk_literal_handler!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: mk_literal_handler!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: mk_literal_handler!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: mk_literal_handler!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: mk_literal_handler!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: mk_literal_handler!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: mk_literal_handler!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: mk_literal_handler!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: mk_literal_handler!(TokenKind::Star, "*") },
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> String {
        String::from(&self.source[(self.pos as usize)..])
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder();
    // Literal text is preserved verbatim; numeric parsing happens in the parser
    let matched = regex.find(&remaining).unwrap().as_str().to_string();

    lexer.push(mk_token!(
        TokenKind::Number,
        matched.clone(),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file))
        }
    ));
    lexer.advance_n(matched.len() as i32);
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder();
    let matched = regex.find(&remaining).unwrap().end();
    lexer.advance_n(matched as i32);
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder();
    let value = regex.find(&remaining).unwrap();

    let kind = if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        *kind
    } else {
        TokenKind::Identifier
    };

    lexer.push(mk_token!(
        kind,
        String::from(value.as_str()),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + value.len() as i32) as u32, Rc::clone(&lexer.file))
        }
    ));

    lexer.advance_n(value.len() as i32);
}

/// Tokenizes lazyLang source into a token vector ending with EOF.
///
/// Unlike a lexer that bails on the first bad character, any character no
/// pattern covers is emitted as an `Illegal` token and scanning continues;
/// the parser turns it into a positioned diagnostic.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let patterns = lex.patterns.clone();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let remaining = lex.remainder();
            let match_here = pattern.regex.find(&remaining);

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                matched = true;
                break;
            }
        }

        if !matched {
            let offending = lex.at();
            let width = offending.len_utf8() as i32;
            lex.push(mk_token!(
                TokenKind::Illegal,
                offending.to_string(),
                Span {
                    start: Position(lex.pos as u32, Rc::clone(&lex.file)),
                    end: Position((lex.pos + width) as u32, Rc::clone(&lex.file))
                }
            ));
            lex.advance_n(width);
        }
    }

    lex.push(mk_token!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: Position(lex.pos as u32, Rc::clone(&lex.file)),
            end: Position(lex.pos as u32, Rc::clone(&lex.file))
        }
    ));
    lex.tokens
}
