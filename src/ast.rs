//! Instructions for reckon - the discrete push/operate input model.
//!
//! A parsed line is a flat sequence of instructions. Numbers push
//! themselves, operators pop their operands at evaluation time, and
//! undo/redo drive the command histories. There is no nesting and no
//! precedence - order on the line is order of execution.

use std::fmt;

use crate::display::format_number;

/// One instruction of the input stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instr {
    /// Push a literal number onto the operand stack.
    Push(f64),
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Reverse the most recent operation.
    Undo,
    /// Re-apply the most recently undone operation.
    Redo,
    /// Pop and discard the top operand.
    Pop,
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instr::Push(n) => write!(f, "{}", format_number(*n)),
            Instr::Add => write!(f, "+"),
            Instr::Subtract => write!(f, "-"),
            Instr::Multiply => write!(f, "*"),
            Instr::Divide => write!(f, "/"),
            Instr::Undo => write!(f, "undo"),
            Instr::Redo => write!(f, "redo"),
            Instr::Pop => write!(f, "pop"),
        }
    }
}

/// A parsed reckon program is a sequence of instructions
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub instructions: Vec<Instr>,
}

impl Program {
    pub fn new(instructions: Vec<Instr>) -> Self {
        Program { instructions }
    }
}
