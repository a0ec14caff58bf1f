use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the shunt crate
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A character sequence matched no recognized token pattern
    LexError(String),
    /// Structurally invalid token stream, e.g. unmatched parentheses
    SyntaxError(String),
    /// Semantically invalid postfix stream: unbound variable, value stack
    /// underflow, or a stack that does not end with exactly one value
    EvalError(String),
    /// An externally supplied variable value is not parseable as a number
    InputError(String),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::LexError(ref message) => write!(fmt, "LexError: {}", message),
            Self::SyntaxError(ref message) => write!(fmt, "SyntaxError: {}", message),
            Self::EvalError(ref message) => write!(fmt, "EvalError: {}", message),
            Self::InputError(ref message) => write!(fmt, "InputError: {}", message),
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match *self {
            Self::LexError(ref message)
            | Self::SyntaxError(ref message)
            | Self::EvalError(ref message)
            | Self::InputError(ref message) => message,
        }
    }

    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            Self::LexError(_) | Self::SyntaxError(_) | Self::EvalError(_) | Self::InputError(_) => {
                None
            }
        }
    }
}
