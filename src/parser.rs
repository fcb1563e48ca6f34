//! Parser for reckon.
//!
//! Converts tokens into a Program (sequence of instructions). The
//! grammar is flat - no nesting, no precedence - so parsing is a
//! straight token-to-instruction mapping. The semantic complexity
//! lives in the calculator.

use crate::ast::{Instr, Program};
use crate::lexer::Token;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unknown instruction: {0}")]
    UnknownInstruction(String),
    #[error("Empty input")]
    EmptyInput,
}

/// Convert an instruction word to an instruction (handles aliases)
fn word_to_instr(word: &str) -> Result<Instr, ParseError> {
    match word {
        "+" | "add" => Ok(Instr::Add),
        "-" | "sub" => Ok(Instr::Subtract),
        "*" | "mul" => Ok(Instr::Multiply),
        "/" | "div" => Ok(Instr::Divide),
        "undo" => Ok(Instr::Undo),
        "redo" => Ok(Instr::Redo),
        "pop" => Ok(Instr::Pop),
        _ => Err(ParseError::UnknownInstruction(word.to_string())),
    }
}

/// Parse tokens into a Program
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut instructions = Vec::with_capacity(tokens.len());
    for token in tokens {
        let instr = match token {
            Token::Number(n) => Instr::Push(n),
            Token::Word(w) => word_to_instr(&w)?,
        };
        instructions.push(instr);
    }

    Ok(Program::new(instructions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    fn parse_numbers_become_pushes() {
        let tokens = lex("2 3").unwrap();
        let program = parse(tokens).unwrap();
        assert_eq!(
            program.instructions,
            vec![Instr::Push(2.0), Instr::Push(3.0)]
        );
    }

    #[test]
    fn parse_operator_symbols() {
        let tokens = lex("+ - * /").unwrap();
        let program = parse(tokens).unwrap();
        assert_eq!(
            program.instructions,
            vec![Instr::Add, Instr::Subtract, Instr::Multiply, Instr::Divide]
        );
    }

    #[test]
    fn parse_word_aliases() {
        let tokens = lex("add sub mul div").unwrap();
        let program = parse(tokens).unwrap();
        assert_eq!(
            program.instructions,
            vec![Instr::Add, Instr::Subtract, Instr::Multiply, Instr::Divide]
        );
    }

    #[test]
    fn parse_history_words() {
        let tokens = lex("undo redo pop").unwrap();
        let program = parse(tokens).unwrap();
        assert_eq!(
            program.instructions,
            vec![Instr::Undo, Instr::Redo, Instr::Pop]
        );
    }

    #[test]
    fn parse_mixed_line() {
        let tokens = lex("2 3 + undo").unwrap();
        let program = parse(tokens).unwrap();
        assert_eq!(
            program.instructions,
            vec![Instr::Push(2.0), Instr::Push(3.0), Instr::Add, Instr::Undo]
        );
    }

    #[test]
    fn parse_unknown_instruction() {
        let tokens = lex("2 frobnicate").unwrap();
        let result = parse(tokens);
        assert!(matches!(result, Err(ParseError::UnknownInstruction(w)) if w == "frobnicate"));
    }

    #[test]
    fn parse_empty_input() {
        let tokens = lex("").unwrap();
        let result = parse(tokens);
        assert!(matches!(result, Err(ParseError::EmptyInput)));
    }
}
