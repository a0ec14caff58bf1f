use crate::error::Error;
use crate::eval::eval_postfix;
use crate::lexer::tokenize;
use crate::rpn::to_postfix;
use crate::vars::{free_variables, resolve, VariableSource};
use std::collections::HashMap;

/// Evaluate a single expression from `input` against ready-made bindings.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// tokenizing, converting or evaluating the expression failed. Every variable
/// the expression mentions must already be present in `context`; this entry
/// point never requests values from anywhere.
///
/// # Example
///
/// ```
/// # use std::collections::HashMap;
/// # use shunt::eval;
/// assert_eq!(eval("45 - 2^3", &HashMap::new()), Ok(37.0));
///
/// let mut context: HashMap<String, f64> = HashMap::new();
/// context.insert("a".into(), 5.0);
/// assert_eq!(eval("3 * a", &context), Ok(15.0));
/// ```
pub fn eval<'a, C>(input: &str, context: C) -> Result<f64, Error>
where
    C: Into<&'a HashMap<String, f64>>,
{
    let postfix = to_postfix(tokenize(input)?)?;
    eval_postfix(&postfix, context.into())
}

/// An expression evaluator with a persistent store of variable bindings.
///
/// The evaluator owns its bindings and a [`VariableSource`](trait.VariableSource.html)
/// that supplies values for variables seen for the first time. Bindings
/// persist across calls, so a variable is requested at most once for the
/// life of the instance no matter how many expressions reference it.
///
/// # Examples
///
/// ```
/// # use shunt::Evaluator;
/// let mut evaluator = Evaluator::new(|_name: &str| "4.0".to_string());
/// assert_eq!(evaluator.evaluate("2 + x * (3 + 1)"), Ok(18.0));
/// // `x` stays bound for later expressions
/// assert_eq!(evaluator.evaluate("x * x"), Ok(16.0));
/// ```
pub struct Evaluator<S> {
    variables: HashMap<String, f64>,
    source: S,
}

impl<S: VariableSource> Evaluator<S> {
    /// Create an evaluator with no bindings.
    pub fn new(source: S) -> Self {
        Self::with_variables(HashMap::new(), source)
    }

    /// Create an evaluator with pre-seeded bindings.
    ///
    /// Pre-seeded names are considered resolved and are never requested from
    /// the source.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::collections::HashMap;
    /// # use shunt::Evaluator;
    /// let mut variables = HashMap::new();
    /// variables.insert("a".to_string(), 9.0);
    /// let mut evaluator =
    ///     Evaluator::with_variables(variables, |_name: &str| -> String { unreachable!() });
    /// assert_eq!(evaluator.evaluate("sqrt(a)"), Ok(3.0));
    /// ```
    pub fn with_variables(variables: HashMap<String, f64>, source: S) -> Self {
        Evaluator { variables, source }
    }

    /// Evaluate `expression`, requesting values for unbound variables.
    ///
    /// The first error aborts the whole call: a lexing failure is reported
    /// before anything is requested from the source, and a value that was
    /// resolved before a later failure stays bound.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, Error> {
        let tokens = tokenize(expression)?;
        let unresolved = free_variables(&tokens);
        resolve(&unresolved, &mut self.variables, &mut self.source)?;
        let postfix = to_postfix(tokens)?;
        eval_postfix(&postfix, &self.variables)
    }

    /// The variable bindings resolved so far.
    pub fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }
}
