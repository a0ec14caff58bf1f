use std::fmt::{self, Display, Formatter};

use libm::pow;

/// Possible tokens to find in the input string.
///
/// Classification happens once, in the lexer: numbers are parsed to their
/// `f64` payload and operator characters to an `Op` there, so later stages
/// match on the variant tag and never re-inspect raw text. An `Ident` is
/// either a function name (member of the `FUNCTIONS` registry) or a variable
/// name; which one is decided where the token is used, and function names
/// always win.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An alphabetic identifier: a function or a variable name
    Ident(String),
    /// A binary operator
    Op(Op),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

/// Allowed binary operators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
}

impl Op {
    /// Get the operator precedence. Operators with higher precedence bind
    /// tighter and should be evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 2,
            Self::Mul | Self::Div => 3,
            Self::Exp => 4,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => true,
            Self::Exp => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Apply the operator to its left operand `a` and right operand `b`.
    ///
    /// Arithmetic follows IEEE floating point semantics: dividing by zero
    /// yields an infinity or NaN instead of an error.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Plus => a + b,
            Self::Minus => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Exp => pow(a, b),
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let symbol = match *self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        };
        write!(fmt, "{}", symbol)
    }
}
