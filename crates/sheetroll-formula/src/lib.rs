//! # sheetroll-formula
//!
//! Arithmetic expression parser and evaluator for sheetroll.
//!
//! This crate provides:
//! - Expression parsing (text → AST)
//! - Expression evaluation (AST → number)
//! - A small set of built-in math functions (`ABS`, `SQRT`, `MIN`, ...)
//! - Number formatting for display
//!
//! Expressions are plain arithmetic: nothing in the input can reach outside the
//! evaluator.
//!
//! ## Example
//!
//! ```rust
//! use sheetroll_formula::{evaluate_str, format_number};
//!
//! let value = evaluate_str("2 * (3) + 1").unwrap();
//! assert_eq!(format_number(value), "7");
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;

pub use ast::{BinaryOperator, Expr, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, evaluate_str, format_number, function_names};
pub use parser::{parse_expression, MAX_NESTING, MAX_TOKENS};
