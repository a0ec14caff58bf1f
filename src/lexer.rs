use crate::error::Error;
use crate::token::{Op, Token};
use std::iter::Peekable;
use std::str::Chars;

/// Split `expression` into tokens.
///
/// All whitespace is removed before scanning, so a blank run never separates
/// the halves of a literal: `"1 2.5"` is the single number `12.5`. The scan
/// is greedy and left to right, and it does not validate grammar. Adjacent
/// value tokens with no operator between them lex without complaint, and the
/// shape error surfaces during evaluation instead.
///
/// # Examples
///
/// ```
/// # use shunt::{tokenize, Op, Token};
/// let tokens = tokenize("2 + x").unwrap();
/// assert_eq!(tokens, vec![
///     Token::Number(2.0),
///     Token::Op(Op::Plus),
///     Token::Ident("x".to_string()),
/// ]);
/// assert!(tokenize("2 $ 5").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, Error> {
    let stripped = expression.split_whitespace().collect::<String>();
    let mut lexer = Lexer::new(&stripped);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// A helper struct driving the character scan
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if let Some(c) = self.input.next() {
            let token = match c {
                ' ' | '\t' | '\n' | '\r' => return self.next_token(),
                c if is_ident_char(c) => {
                    let mut name = String::new();
                    name.push(c);
                    'ident: while let Some(&c) = self.input.peek() {
                        if is_ident_char(c) {
                            self.input.next();
                            name.push(c);
                        } else {
                            break 'ident;
                        }
                    }
                    Token::Ident(name)
                }
                c if c.is_ascii_digit() => {
                    let mut text = String::new();
                    text.push(c);
                    'integer: while let Some(&c) = self.input.peek() {
                        if c.is_ascii_digit() {
                            self.input.next();
                            text.push(c);
                        } else {
                            break 'integer;
                        }
                    }
                    if let Some(&'.') = self.input.peek() {
                        self.input.next();
                        text.push('.');
                        // the fractional part needs at least one digit
                        match self.input.peek() {
                            Some(&c) if c.is_ascii_digit() => {}
                            _ => {
                                return Err(Error::LexError(format!(
                                    "malformed number literal '{}'",
                                    text
                                )));
                            }
                        }
                        'fraction: while let Some(&c) = self.input.peek() {
                            if c.is_ascii_digit() {
                                self.input.next();
                                text.push(c);
                            } else {
                                break 'fraction;
                            }
                        }
                    }
                    let number = text.parse::<f64>().map_err(|_| {
                        Error::LexError(format!("malformed number literal '{}'", text))
                    })?;
                    Token::Number(number)
                }
                '+' => Token::Op(Op::Plus),
                '-' => Token::Op(Op::Minus),
                '*' => Token::Op(Op::Mul),
                '/' => Token::Op(Op::Div),
                '^' => Token::Op(Op::Exp),
                '(' => Token::LParen,
                ')' => Token::RParen,
                other => {
                    return Err(Error::LexError(format!(
                        "unexpected character '{}' in input",
                        other
                    )));
                }
            };
            Ok(Some(token))
        } else {
            Ok(None)
        }
    }
}

/// Check if `c` can appear in an identifier
fn is_ident_char(c: char) -> bool {
    return c.is_ascii_alphabetic();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Op, Token};
    use test_case::test_case;

    #[test_case("2 + 2" => Ok(vec![Token::Number(2.0), Token::Op(Op::Plus), Token::Number(2.0)]) ; "addition keeps infix order")]
    #[test_case("2+2" => Ok(vec![Token::Number(2.0), Token::Op(Op::Plus), Token::Number(2.0)]) ; "spaces are optional")]
    #[test_case("1 2.5" => Ok(vec![Token::Number(12.5)]) ; "whitespace never separates a literal")]
    #[test_case("12.75" => Ok(vec![Token::Number(12.75)]) ; "decimal literal")]
    #[test_case("sin(y)" => Ok(vec![Token::Ident("sin".to_string()), Token::LParen, Token::Ident("y".to_string()), Token::RParen]) ; "function call shape")]
    #[test_case("a ^ b" => Ok(vec![Token::Ident("a".to_string()), Token::Op(Op::Exp), Token::Ident("b".to_string())]) ; "caret is an operator")]
    #[test_case("x5" => Ok(vec![Token::Ident("x".to_string()), Token::Number(5.0)]) ; "adjacent tokens lex without grammar checks")]
    #[test_case("" => Ok(vec![]) ; "empty input is an empty sequence")]
    fn tokenize_cases(expression: &str) -> Result<Vec<Token>, Error> {
        tokenize(expression)
    }

    #[test]
    fn identifiers_are_maximal_alphabetic_runs() {
        assert_eq!(
            tokenize("alphaBeta"),
            Ok(vec![Token::Ident("alphaBeta".to_string())])
        );
        assert!(is_ident_char('z'));
        assert!(is_ident_char('Q'));
        for c in ['3', '_', '.', '(', '$', 'à'].iter() {
            assert!(!is_ident_char(*c));
        }
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert_eq!(
            tokenize("2 + x $ 5"),
            Err(Error::LexError(
                "unexpected character '$' in input".to_string()
            ))
        );
        // commas are not part of the language
        assert!(tokenize("max(2, 3)").is_err());
        // literals start with a digit
        assert!(tokenize(".5").is_err());
    }

    #[test]
    fn trailing_dot_is_a_malformed_literal() {
        assert_eq!(
            tokenize("1. + 2"),
            Err(Error::LexError("malformed number literal '1.'".to_string()))
        );
    }

    #[test]
    fn operators_lex_to_their_tags() {
        assert_eq!(
            tokenize("1+2-3*4/5^6"),
            Ok(vec![
                Token::Number(1.0),
                Token::Op(Op::Plus),
                Token::Number(2.0),
                Token::Op(Op::Minus),
                Token::Number(3.0),
                Token::Op(Op::Mul),
                Token::Number(4.0),
                Token::Op(Op::Div),
                Token::Number(5.0),
                Token::Op(Op::Exp),
                Token::Number(6.0),
            ])
        );
    }
}
