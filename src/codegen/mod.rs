//! Code generation module: AST to Go source text.
//!
//! The generator walks the AST and emits a complete, directly compilable
//! Go program. Its one piece of state is the set of names already
//! declared, threaded through the statement generators, which decides
//! between Go's `:=` declare form and plain `=` assignment. The tracking
//! is program-global in textual visit order, not block-scoped.
//!
//! The generator performs no structural validation; the parser only ever
//! hands it well-formed nodes.

pub mod codegen;
