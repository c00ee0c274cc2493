//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including bindings, arrays, conditionals, loops, print statements,
//! operator precedence and error recovery.

use std::rc::Rc;

use crate::{
    ast::{
        expressions::Expr,
        statements::{Program, Stmt},
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> (Program, Vec<Error>) {
    let tokens = tokenize(source.to_string(), Some("test.lazy".to_string()));
    parse(tokens, Rc::new("test.lazy".to_string()))
}

#[test]
fn test_parse_var_binding() {
    let (program, errors) = parse_source("lazy x = 42;");

    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);

    let Stmt::Var(var) = &program.statements[0] else {
        panic!("expected a var binding");
    };
    assert_eq!(var.name, "x");
    let Expr::Number(number) = &var.value else {
        panic!("expected a number literal");
    };
    assert_eq!(number.value, 42.0);
}

#[test]
fn test_semicolon_is_optional() {
    let (program, errors) = parse_source("lazy x = 1");

    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let (program, errors) = parse_source("lazy r = 2 + 3 * 4;");

    assert!(errors.is_empty());
    let Stmt::Var(var) = &program.statements[0] else {
        panic!("expected a var binding");
    };

    // (2 + (3 * 4)), never ((2 + 3) * 4)
    let Expr::Binary(add) = &var.value else {
        panic!("expected a binary expression");
    };
    assert_eq!(add.operator.value, "+");
    assert!(matches!(add.left.as_ref(), Expr::Number(n) if n.value == 2.0));

    let Expr::Binary(mul) = add.right.as_ref() else {
        panic!("expected the rhs to be a multiplication");
    };
    assert_eq!(mul.operator.value, "*");
}

#[test]
fn test_same_strength_operators_are_left_associative() {
    let (program, errors) = parse_source("lazy r = 10 - 2 - 3;");

    assert!(errors.is_empty());
    let Stmt::Var(var) = &program.statements[0] else {
        panic!("expected a var binding");
    };

    // ((10 - 2) - 3)
    let Expr::Binary(outer) = &var.value else {
        panic!("expected a binary expression");
    };
    assert!(matches!(outer.right.as_ref(), Expr::Number(n) if n.value == 3.0));
    assert!(matches!(outer.left.as_ref(), Expr::Binary(_)));
}

#[test]
fn test_comparison_binds_loosest() {
    let (program, errors) = parse_source("lazy c = a + 1 < b;");

    assert!(errors.is_empty());
    let Stmt::Var(var) = &program.statements[0] else {
        panic!("expected a var binding");
    };

    let Expr::Binary(cmp) = &var.value else {
        panic!("expected a binary expression");
    };
    assert_eq!(cmp.operator.value, "<");
    assert!(matches!(cmp.left.as_ref(), Expr::Binary(_)));
}

#[test]
fn test_index_binds_tighter_than_arithmetic() {
    let (program, errors) = parse_source("lazy v = a + b[1];");

    assert!(errors.is_empty());
    let Stmt::Var(var) = &program.statements[0] else {
        panic!("expected a var binding");
    };

    let Expr::Binary(add) = &var.value else {
        panic!("expected a binary expression");
    };
    assert!(matches!(add.right.as_ref(), Expr::Index(_)));
}

#[test]
fn test_index_access_chains() {
    let (program, errors) = parse_source("lazy v = m[0][1];");

    assert!(errors.is_empty());
    let Stmt::Var(var) = &program.statements[0] else {
        panic!("expected a var binding");
    };

    let Expr::Index(outer) = &var.value else {
        panic!("expected an index expression");
    };
    assert!(matches!(outer.collection.as_ref(), Expr::Index(_)));
}

#[test]
fn test_parse_array_binding() {
    let (program, errors) = parse_source("lazyArray xs = [1, 2, 3];");

    assert!(errors.is_empty());
    let Stmt::Array(array) = &program.statements[0] else {
        panic!("expected an array binding");
    };
    assert_eq!(array.name, "xs");
    assert_eq!(array.values.len(), 3);
    assert!(array.values.iter().all(|value| value.is_some()));
}

#[test]
fn test_parse_empty_array() {
    let (program, errors) = parse_source("lazyArray xs = [];");

    assert!(errors.is_empty());
    let Stmt::Array(array) = &program.statements[0] else {
        panic!("expected an array binding");
    };
    assert!(array.values.is_empty());
}

#[test]
fn test_array_omitted_element_becomes_none() {
    let (program, errors) = parse_source("lazyArray xs = [1, , 3];");

    assert!(errors.is_empty());
    let Stmt::Array(array) = &program.statements[0] else {
        panic!("expected an array binding");
    };
    assert_eq!(array.values.len(), 3);
    assert!(array.values[0].is_some());
    assert!(array.values[1].is_none());
    assert!(array.values[2].is_some());
}

#[test]
fn test_array_trailing_comma() {
    let (program, errors) = parse_source("lazyArray xs = [1, 2,];");

    assert!(errors.is_empty());
    let Stmt::Array(array) = &program.statements[0] else {
        panic!("expected an array binding");
    };
    assert_eq!(array.values.len(), 2);
}

#[test]
fn test_parse_if_statement() {
    let (program, errors) = parse_source("if x > 0 { lazyPrint(x); }");

    assert!(errors.is_empty());
    let Stmt::If(if_stmt) = &program.statements[0] else {
        panic!("expected a conditional");
    };
    assert_eq!(if_stmt.consequence.len(), 1);
    assert!(if_stmt.alternative.is_empty());
}

#[test]
fn test_parse_if_else_statement() {
    let (program, errors) = parse_source("if x > 0 { lazyPrint(x); } el { lazyPrint(0); }");

    assert!(errors.is_empty());
    let Stmt::If(if_stmt) = &program.statements[0] else {
        panic!("expected a conditional");
    };
    assert_eq!(if_stmt.consequence.len(), 1);
    assert_eq!(if_stmt.alternative.len(), 1);
}

#[test]
fn test_parse_for_statement() {
    let (program, errors) = parse_source("for (i = 0; i < 3; i = i + 1) { lazyPrint(i); }");

    assert!(errors.is_empty());
    let Stmt::For(for_stmt) = &program.statements[0] else {
        panic!("expected a for loop");
    };
    assert_eq!(for_stmt.init.as_ref().unwrap().name, "i");
    assert!(for_stmt.condition.is_some());
    assert_eq!(for_stmt.post.as_ref().unwrap().name, "i");
    assert_eq!(for_stmt.body.len(), 1);
}

#[test]
fn test_parse_for_with_all_parts_omitted() {
    let (program, errors) = parse_source("for (;;) { lazyPrint(1); }");

    assert!(errors.is_empty());
    let Stmt::For(for_stmt) = &program.statements[0] else {
        panic!("expected a for loop");
    };
    assert!(for_stmt.init.is_none());
    assert!(for_stmt.condition.is_none());
    assert!(for_stmt.post.is_none());
}

#[test]
fn test_parse_print_statement() {
    let (program, errors) = parse_source("lazyPrint(x + 1);");

    assert!(errors.is_empty());
    assert!(matches!(program.statements[0], Stmt::Print(_)));
}

#[test]
fn test_missing_expression_yields_one_diagnostic() {
    let (program, errors) = parse_source("lazy x = ;");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "ExpectedExpression");
    // Positioned at the `;` where the expression should have been
    assert_eq!(errors[0].get_position().0, 9);
    assert!(program.statements.is_empty());
}

#[test]
fn test_parser_recovers_at_statement_boundary() {
    let (program, errors) = parse_source("lazy a = ;\nlazy b = 2;\nlazyPrint(b);");

    // The bad statement costs exactly one diagnostic; the rest of the
    // program still parses
    assert_eq!(errors.len(), 1);
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_reserved_keyword_is_rejected() {
    let (_, errors) = parse_source("while x < 3 { lazyPrint(x); }");

    assert!(!errors.is_empty());
    assert_eq!(errors[0].get_error_name(), "ReservedKeyword");
}

#[test]
fn test_illegal_token_is_rejected() {
    let (program, errors) = parse_source("@");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnrecognisedToken");
    assert!(program.statements.is_empty());
}

#[test]
fn test_non_statement_token_is_not_silently_skipped() {
    let (program, errors) = parse_source("42;");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "ExpectedStatement");
    assert!(program.statements.is_empty());
}

#[test]
fn test_expected_vs_found_diagnostic() {
    let (_, errors) = parse_source("lazy = 1;");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "ExpectedToken");
}

#[test]
fn test_parse_is_pure() {
    let source = "lazy x = 1;\nif x > 0 { lazy y = x * 2; }\nlazyPrint(y);";
    let (first, first_errors) = parse_source(source);
    let (second, second_errors) = parse_source(source);

    assert!(first_errors.is_empty() && second_errors.is_empty());
    assert_eq!(format!("{:?}", first), format!("{:?}", second));
}
