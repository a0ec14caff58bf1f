use std::collections::HashMap;

use crate::error::Error;
use crate::token::Token;
use crate::util::FUNCTIONS;

/// Evaluate postfix `tokens` against the `variables` bindings.
///
/// Numbers and bound variables push their value, a function name pops one
/// value and pushes the function result, an operator pops its right operand
/// and then its left one and pushes the combination. A well formed postfix
/// sequence leaves exactly one value behind; anything else is reported as an
/// `EvalError`, as are unbound variable names. An identifier that matches a
/// supported function name is always applied as the function, even when a
/// variable of the same name is bound.
///
/// # Examples
///
/// ```
/// # use std::collections::HashMap;
/// # use shunt::{eval_postfix, to_postfix, tokenize};
/// let postfix = to_postfix(tokenize("3 + 5 * 2").unwrap()).unwrap();
/// assert_eq!(eval_postfix(&postfix, &HashMap::new()), Ok(13.0));
/// ```
pub fn eval_postfix(tokens: &[Token], variables: &HashMap<String, f64>) -> Result<f64, Error> {
    let mut stack: Vec<f64> = Vec::new();

    for token in tokens {
        match *token {
            Token::Number(number) => stack.push(number),
            Token::Ident(ref name) => {
                if let Some(&function) = FUNCTIONS.get(name) {
                    let argument = stack.pop().ok_or_else(|| {
                        Error::EvalError(format!("function '{}' is missing its argument", name))
                    })?;
                    stack.push(function(argument));
                } else if let Some(&value) = variables.get(name) {
                    stack.push(value);
                } else {
                    return Err(Error::EvalError(format!(
                        "variable '{}' is not bound",
                        name
                    )));
                }
            }
            Token::Op(op) => {
                let b = stack.pop().ok_or_else(|| {
                    Error::EvalError(format!("operator '{}' is missing its right operand", op))
                })?;
                let a = stack.pop().ok_or_else(|| {
                    Error::EvalError(format!("operator '{}' is missing its left operand", op))
                })?;
                stack.push(op.apply(a, b));
            }
            Token::LParen | Token::RParen => {
                return Err(Error::EvalError(
                    "parenthesis in postfix input".to_string(),
                ));
            }
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(Error::EvalError(format!(
            "value stack holds {} entries after evaluation, expected exactly one",
            stack.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::eval_postfix;
    use crate::error::Error;
    use crate::lexer::tokenize;
    use crate::rpn::to_postfix;
    use crate::token::{Op, Token};
    use std::collections::HashMap;

    fn run(expression: &str, variables: &HashMap<String, f64>) -> Result<f64, Error> {
        eval_postfix(&to_postfix(tokenize(expression).unwrap()).unwrap(), variables)
    }

    #[test]
    fn operands_pop_in_right_then_left_order() {
        let empty = HashMap::new();
        assert_eq!(run("10 - 3", &empty), Ok(7.0));
        assert_eq!(run("10 / 4", &empty), Ok(2.5));
        assert_eq!(run("2 ^ 10", &empty), Ok(1024.0));
    }

    #[test]
    fn variables_push_their_bound_value() {
        let mut variables = HashMap::new();
        variables.insert("x".to_string(), 4.0);
        assert_eq!(run("3 * x + 1", &variables), Ok(13.0));
    }

    #[test]
    fn unbound_variables_are_an_error() {
        let err = run("2 * z", &HashMap::new()).unwrap_err();
        assert_eq!(err, Error::EvalError("variable 'z' is not bound".to_string()));
    }

    #[test]
    fn functions_pop_one_argument() {
        let mut variables = HashMap::new();
        variables.insert("a".to_string(), 9.0);
        assert_eq!(run("sqrt(a)", &variables), Ok(3.0));
        assert_eq!(run("sqrt(4) + sqrt(9)", &HashMap::new()), Ok(5.0));
    }

    #[test]
    fn function_names_shadow_bound_variables() {
        let mut variables = HashMap::new();
        variables.insert("sin".to_string(), 5.0);
        // the identifier is applied as the function, the binding is ignored
        assert_eq!(
            eval_postfix(
                &[Token::Number(0.0), Token::Ident("sin".to_string())],
                &variables,
            ),
            Ok(0.0)
        );
    }

    #[test]
    fn stack_underflow_is_reported() {
        let err = eval_postfix(&[Token::Op(Op::Plus)], &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            Error::EvalError("operator '+' is missing its right operand".to_string())
        );

        let err = eval_postfix(
            &[Token::Number(1.0), Token::Op(Op::Mul)],
            &HashMap::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::EvalError("operator '*' is missing its left operand".to_string())
        );

        let err =
            eval_postfix(&[Token::Ident("sin".to_string())], &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            Error::EvalError("function 'sin' is missing its argument".to_string())
        );
    }

    #[test]
    fn leftover_values_are_reported() {
        let err = eval_postfix(
            &[Token::Number(2.0), Token::Number(3.0)],
            &HashMap::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::EvalError(
                "value stack holds 2 entries after evaluation, expected exactly one".to_string()
            )
        );
    }

    #[test]
    fn empty_input_is_reported() {
        let err = eval_postfix(&[], &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            Error::EvalError(
                "value stack holds 0 entries after evaluation, expected exactly one".to_string()
            )
        );
    }

    #[test]
    fn parentheses_cannot_appear_in_postfix_input() {
        let err = eval_postfix(&[Token::LParen], &HashMap::new()).unwrap_err();
        assert_eq!(err, Error::EvalError("parenthesis in postfix input".to_string()));
    }

    #[test]
    fn division_by_zero_follows_float_semantics() {
        let empty = HashMap::new();
        assert_eq!(run("1 / 0", &empty), Ok(f64::INFINITY));
        assert!(run("0 / 0", &empty).unwrap().is_nan());
        assert!(run("sqrt(0 - 4)", &empty).unwrap().is_nan());
    }
}
