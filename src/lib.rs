//! reckon - a stack calculator that can take it back
//!
//! # Overview
//!
//! reckon is a postfix arithmetic evaluator with an explicit operand
//! stack and an undo/redo history. Numbers push themselves; operators
//! pop two operands, push the result, and record what they consumed so
//! the operation can be reversed later.
//!
//! # Core Concepts
//!
//! ## Stack-Based Evaluation
//!
//! ```text
//! # Numbers push themselves onto the stack
//! 2 3                  # Stack: [2, 3]
//!
//! # Operators pop two operands and push the result
//! 2 3 +                # Stack: [5]
//!
//! # Subtraction takes the top from the value beneath it
//! 10 3 -               # Stack: [7]
//!
//! # Division divides the top by the value beneath it
//! 2 10 /               # Stack: [5]
//! ```
//!
//! ## Undo and Redo
//!
//! ```text
//! # Every operation records the operands it consumed
//! 2 3 +                # Stack: [5]
//! pop undo             # Stack: [2, 3] - operands restored
//! redo                 # Stack: [5]    - operation re-applied
//! ```
//!
//! A fresh operation clears the redo chain; plain pushes and pops do
//! not.
//!
//! # Example
//!
//! ```rust
//! use reckon::{lex, parse, Evaluator};
//!
//! let tokens = lex("2 3 +").unwrap();
//! let program = parse(tokens).unwrap();
//! let mut eval = Evaluator::new();
//! let result = eval.eval(&program).unwrap();
//! assert_eq!(result.output, "5");
//! ```

pub mod ast;
pub mod calc;
pub mod display;
pub mod eval;
pub mod lexer;
pub mod parser;

// Re-export commonly used items
pub use ast::{Instr, Program};
pub use calc::{CalcError, Calculator, Command, OpKind, OperandStack};
pub use eval::{EvalResult, Evaluator};
pub use lexer::{lex, LexError, Token};
pub use parser::{parse, ParseError};

/// Convenience function to evaluate a reckon line
pub fn eval(input: &str) -> Result<EvalResult, String> {
    let tokens = lex(input).map_err(|e| e.to_string())?;
    let program = parse(tokens).map_err(|e| e.to_string())?;
    let mut evaluator = Evaluator::new();
    evaluator.eval(&program).map_err(|e| e.to_string())
}
