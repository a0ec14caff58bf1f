use std::collections::{HashMap, HashSet};
use std::io::{self, Write};

use crate::error::Error;
use crate::token::Token;
use crate::util::is_function;

/// Collect the free variable names referenced by `tokens`.
///
/// Every identifier that is not a supported function name counts as a
/// variable. An identifier spelled like a function name is always the
/// function, never a variable, so it is not reported here.
///
/// # Examples
///
/// ```
/// # use std::collections::HashSet;
/// # use shunt::{free_variables, tokenize};
/// let tokens = tokenize("2 + x * (3 + sin(y))").unwrap();
/// assert_eq!(free_variables(&tokens), HashSet::from(["x", "y"]));
/// ```
pub fn free_variables(tokens: &[Token]) -> HashSet<&str> {
    let mut variables = HashSet::new();
    for token in tokens {
        if let Token::Ident(ref name) = *token {
            if !is_function(name) {
                variables.insert(name.as_str());
            }
        }
    }
    variables
}

/// The external collaborator that supplies values for unresolved variables.
///
/// During evaluation the source is asked once per free variable that has no
/// binding yet. It returns the value as text; parsing and error reporting
/// stay inside the crate, so a source only ever hands back a line. Any
/// `FnMut(&str) -> String` closure is a source:
///
/// ```
/// # use shunt::Evaluator;
/// let mut evaluator = Evaluator::new(|_name: &str| "9.0".to_string());
/// assert_eq!(evaluator.evaluate("sqrt(a)"), Ok(3.0));
/// ```
pub trait VariableSource {
    /// Produce the textual value for the variable `name`.
    fn request(&mut self, name: &str) -> String;
}

impl<F> VariableSource for F
where
    F: FnMut(&str) -> String,
{
    fn request(&mut self, name: &str) -> String {
        self(name)
    }
}

/// A value source that prompts on stdout and reads one line from stdin.
///
/// This reproduces interactive variable entry: construct an `Evaluator` with
/// `StdinSource` and every unbound variable in an expression is asked for on
/// the terminal, once. A failed read yields an empty line, which then fails
/// like any other non-numeric input.
pub struct StdinSource;

impl VariableSource for StdinSource {
    fn request(&mut self, name: &str) -> String {
        print!("Enter a value for {}: ", name);
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().read_line(&mut line);
        line
    }
}

/// Fill `bindings` with a value for every name in `variables` that is not
/// bound yet, asking `source` once per missing name. A name that fails to
/// parse stays unbound and aborts the whole resolution.
pub fn resolve<S>(
    variables: &HashSet<&str>,
    bindings: &mut HashMap<String, f64>,
    source: &mut S,
) -> Result<(), Error>
where
    S: VariableSource,
{
    for name in variables {
        if !bindings.contains_key(*name) {
            let text = source.request(name);
            let trimmed = text.trim();
            let value = trimmed.parse::<f64>().map_err(|_| {
                Error::InputError(format!(
                    "value '{}' supplied for variable '{}' is not a number",
                    trimmed, name
                ))
            })?;
            bindings.insert((*name).to_string(), value);
        }
    }
    Ok(())
}
