#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! Shunt, a crate for dynamic evaluation of mathematical expressions.
//!
//! This crate provides run-time evaluation of mathematical expressions,
//! embedded in strings. The easiest way to use this crate is with the
//! [`eval`](fn.eval.html) function:
//!
//! ```
//! use std::collections::HashMap;
//! assert_eq!(shunt::eval("3 + 5 * 2", &HashMap::new()), Ok(13.0));
//! ```
//!
//! The second argument to `eval` is a `HashMap` that can define variables:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut context: HashMap<String, f64> = HashMap::new();
//! context.insert("a".into(), 3.5);
//! assert_eq!(shunt::eval("2 * a", &context), Ok(7.0));
//! ```
//!
//! With `eval`, every variable must be bound up front. The
//! [`Evaluator`](struct.Evaluator.html) type instead resolves variables
//! lazily: when an expression mentions a name with no binding, the value is
//! requested from a [`VariableSource`](trait.VariableSource.html) and then
//! remembered, so a variable is asked for at most once. Any
//! `FnMut(&str) -> String` closure works as a source, and the bundled
//! [`StdinSource`](struct.StdinSource.html) prompts on the terminal.
//!
//! ```
//! use shunt::Evaluator;
//!
//! let mut evaluator = Evaluator::new(|_name: &str| "4.0".to_string());
//! assert_eq!(evaluator.evaluate("2 + x * (3 + 1)"), Ok(18.0));
//!
//! // `x` was remembered, the source is not consulted again
//! assert_eq!(evaluator.evaluate("x ^ 2"), Ok(16.0));
//! ```
//!
//! # Language definition
//!
//! The language implemented by shunt can contain the following elements:
//!
//! - float literal values: `3`, `12.75`. A literal starts with a digit, and
//!   a decimal point must be followed by at least one digit;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division and `^` for exponentiation.
//!   Exponentiation is right associative, the others are left associative;
//! - variables. Variable names are runs of ASCII letters;
//! - function call: `sin(a)`, `sqrt(9.0)`. The functions `sin`, `cos`,
//!   `tan`, `sqrt` and `log` are accessible, where `log` is the natural
//!   logarithm and the trigonometric functions work in radians.
//!
//! Any other symbol is forbidden in the input. Whitespace is removed before
//! tokenizing, so it never separates anything: `1 2.5` is the number `12.5`.
//! There is no unary minus, `-3` must be written `0 - 3`.
//!
//! Arithmetic keeps the usual floating point properties: division by zero
//! yields an infinity or `NaN` instead of an error, `NaN` and infinities
//! propagate through every operator and function.
//!
//! # Technical details
//!
//! shunt works in passes over `f64` data. The input string is tokenized,
//! unbound variables are collected and resolved through the source, the
//! shunting-yard algorithm reorders the tokens into postfix and a stack
//! machine folds the postfix sequence into the result. The intermediate
//! passes are public, so the pipeline can also be driven stage by stage with
//! [`tokenize`](fn.tokenize.html), [`free_variables`](fn.free_variables.html),
//! [`to_postfix`](fn.to_postfix.html) and
//! [`eval_postfix`](fn.eval_postfix.html).

#[macro_use]
extern crate lazy_static;

mod error;
mod eval;
mod expr;
mod lexer;
mod rpn;
mod token;
mod util;
mod vars;

pub use error::Error;
pub use eval::eval_postfix;
pub use expr::{eval, Evaluator};
pub use lexer::tokenize;
pub use rpn::to_postfix;
pub use token::{Op, Token};
pub use util::{is_function, FUNCTIONS};
pub use vars::{free_variables, StdinSource, VariableSource};
