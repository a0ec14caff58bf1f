use crate::error::Error;
use crate::token::Token;
use crate::util::is_function;

/// Reorder infix `tokens` into postfix (reverse polish) order.
///
/// This is the shunting-yard algorithm: values go straight to the output,
/// operators wait on a stack until something with lower binding strength
/// shows up, and parentheses bracket subexpressions. A function name waits on
/// the stack too and is emitted right after its closing parenthesis, which is
/// what ties it to its argument. Fails with a `SyntaxError` when parentheses
/// do not match up.
///
/// # Examples
///
/// ```
/// # use shunt::{to_postfix, tokenize, Op, Token};
/// let tokens = tokenize("3 + 5 * 2").unwrap();
/// assert_eq!(to_postfix(tokens).unwrap(), vec![
///     Token::Number(3.0),
///     Token::Number(5.0),
///     Token::Number(2.0),
///     Token::Op(Op::Mul),
///     Token::Op(Op::Plus),
/// ]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Ident(ref name) if is_function(name) => operators.push(token.clone()),
            Token::Ident(_) => output.push(token),
            Token::Op(op) => {
                // pop while the stacked operator binds at least as tight; a
                // left parenthesis or a pending function stops the scan
                while let Some(&Token::Op(top)) = operators.last() {
                    if top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence() && op.is_left_associative())
                    {
                        operators.pop();
                        output.push(Token::Op(top));
                    } else {
                        break;
                    }
                }
                operators.push(Token::Op(op));
            }
            Token::LParen => operators.push(token),
            Token::RParen => {
                loop {
                    match operators.pop() {
                        Some(Token::LParen) => break,
                        Some(pending) => output.push(pending),
                        None => {
                            return Err(Error::SyntaxError(
                                "unmatched closing parenthesis".into(),
                            ));
                        }
                    }
                }
                // a function name directly before the opening parenthesis
                // applies to the whole bracketed argument
                let top_is_function =
                    matches!(operators.last(), Some(Token::Ident(name)) if is_function(name));
                if top_is_function {
                    if let Some(function) = operators.pop() {
                        output.push(function);
                    }
                }
            }
        }
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Token::LParen | Token::RParen => {
                return Err(Error::SyntaxError("unmatched opening parenthesis".into()));
            }
            other => output.push(other),
        }
    }

    Ok(output)
}
