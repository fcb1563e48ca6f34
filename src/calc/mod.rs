//! The calculator core - an operand stack plus undo/redo histories.
//!
//! Arithmetic pops its operands, pushes the result, and records what it
//! consumed as a [`Command`]. The histories are LIFO: undo reverses the
//! most recent operation, redo re-applies the most recently undone one,
//! and any fresh operation clears the redo chain.

mod arith;
mod command;
mod history;
mod stack;

pub use command::{Command, OpKind};
pub use stack::OperandStack;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    /// A pushed or computed value was NaN.
    #[error("{0}: operand is not a number")]
    InvalidOperand(&'static str),
    #[error("pop: stack is empty")]
    EmptyStack,
    #[error("{0} requires two operands on the stack")]
    MissingOperands(&'static str),
    #[error("divide: division by zero")]
    DivideByZero,
}

/// The calculator: one operand stack and the two command histories.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    /// Values being computed on.
    stack: OperandStack,
    /// Applied operations, most recent on top.
    undo_stack: Vec<Command>,
    /// Undone operations, most recently undone on top.
    redo_stack: Vec<Command>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an operand onto the stack. Fails on NaN, which has no
    /// defined arithmetic here.
    pub fn push(&mut self, value: f64) -> Result<(), CalcError> {
        self.stack.push(value)
    }

    /// Pop the top operand. Direct pops are not recorded in history.
    pub fn pop(&mut self) -> Result<f64, CalcError> {
        self.stack.pop()
    }

    /// The operand stack contents, bottom first.
    pub fn stack(&self) -> &[f64] {
        self.stack.values()
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Drop the stack and both histories, returning to the initial
    /// state.
    pub fn reset(&mut self) {
        *self = Calculator::new();
    }
}
