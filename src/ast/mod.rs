/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Statements and expressions are closed enums, so the code generator can
/// match exhaustively - there is no default arm to silently swallow a
/// node kind.
///
/// Submodules:
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the program root and statement variants
pub mod expressions;
pub mod statements;
