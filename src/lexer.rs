//! Tokenization for reckon.
//!
//! Input is whitespace-delimited words. Each word is either a numeric
//! literal or an instruction word; classification happens here so the
//! parser only ever sees the two shapes.

use nom::{
    bytes::complete::take_while1,
    character::complete::multispace0,
    combinator::map,
    multi::many0,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// An instruction word (operator symbol, alias, or history word)
    Word(String),
}

#[derive(Error, Debug)]
pub enum LexError {
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Classify one word. Anything `f64` can parse is a number - this is
/// what lets `-3`, `2.5`, `1e6` and `inf` through as literals while
/// a bare `-` stays an operator. `nan` also parses; the calculator
/// rejects it at push time rather than here.
fn classify(word: &str) -> Token {
    match word.parse::<f64>() {
        Ok(n) => Token::Number(n),
        Err(_) => Token::Word(word.to_string()),
    }
}

/// Parse any single token: skip whitespace, take one word
fn token(input: &str) -> IResult<&str, Token> {
    preceded(
        multispace0,
        map(take_while1(|c: char| !c.is_whitespace()), classify),
    )(input)
}

/// Strip inline comments from input (# to end of line)
fn strip_comments(input: &str) -> String {
    let mut result = String::new();
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '#' {
            // Skip to end of line
            for remaining in chars.by_ref() {
                if remaining == '\n' {
                    result.push('\n');
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Tokenize a complete input string
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    // Strip inline comments first
    let input = strip_comments(input);

    let (remaining, tokens) =
        many0(token)(input.as_str()).map_err(|e| LexError::ParseError(format!("{:?}", e)))?;

    // Check for any remaining unparsed content
    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(LexError::UnexpectedChar(
            remaining.chars().next().unwrap(),
        ));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_number() {
        let tokens = lex("42").unwrap();
        assert_eq!(tokens, vec![Token::Number(42.0)]);
    }

    #[test]
    fn tokenize_negative_number() {
        let tokens = lex("-3").unwrap();
        assert_eq!(tokens, vec![Token::Number(-3.0)]);
    }

    #[test]
    fn tokenize_float_and_exponent() {
        let tokens = lex("2.5 1e6").unwrap();
        assert_eq!(tokens, vec![Token::Number(2.5), Token::Number(1e6)]);
    }

    #[test]
    fn tokenize_explicit_plus_is_a_number() {
        let tokens = lex("+3").unwrap();
        assert_eq!(tokens, vec![Token::Number(3.0)]);
    }

    #[test]
    fn tokenize_bare_operators_are_words() {
        let tokens = lex("+ - * /").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("+".to_string()),
                Token::Word("-".to_string()),
                Token::Word("*".to_string()),
                Token::Word("/".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_history_words() {
        let tokens = lex("undo redo pop").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word("undo".to_string()),
                Token::Word("redo".to_string()),
                Token::Word("pop".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_mixed_line() {
        let tokens = lex("2 3 +").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Word("+".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_multiline() {
        let tokens = lex("2 3\nadd").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Number(3.0),
                Token::Word("add".to_string()),
            ]
        );
    }

    #[test]
    fn tokenize_nan_is_a_number_token() {
        let tokens = lex("nan").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(matches!(tokens[0], Token::Number(n) if n.is_nan()));
    }

    #[test]
    fn tokenize_inline_comment() {
        let tokens = lex("2 3 # + would sum these").unwrap();
        assert_eq!(tokens, vec![Token::Number(2.0), Token::Number(3.0)]);
    }

    #[test]
    fn tokenize_comment_to_end_of_line() {
        let tokens = lex("2 # first\n3 # second").unwrap();
        assert_eq!(tokens, vec![Token::Number(2.0), Token::Number(3.0)]);
    }

    #[test]
    fn tokenize_empty_input() {
        let tokens = lex("").unwrap();
        assert!(tokens.is_empty());

        let tokens = lex("   \n  ").unwrap();
        assert!(tokens.is_empty());
    }
}
