//! Reversible operation records.
//!
//! Every arithmetic operation captures the two operands it consumed as
//! a `Command`. Undo pushes those operands back; redo runs the same
//! kind of operation forward again. Commands are immutable once
//! created - they only move between the undo and redo histories.

/// Which arithmetic operation a command performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OpKind {
    /// The instruction word, used in error messages and trace output.
    pub fn name(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Subtract => "subtract",
            OpKind::Multiply => "multiply",
            OpKind::Divide => "divide",
        }
    }

    /// Forward computation over operands in pop order: `a` was popped
    /// first (the old top), `b` second. Subtraction computes `b - a`
    /// while division computes `a / b`, so the two are not mirror
    /// images - division treats the old top as the dividend.
    pub fn forward(self, a: f64, b: f64) -> f64 {
        match self {
            OpKind::Add => a + b,
            OpKind::Subtract => b - a,
            OpKind::Multiply => a * b,
            OpKind::Divide => a / b,
        }
    }
}

/// A record of one applied operation: the kind plus the two operands it
/// consumed, in pop order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Command {
    kind: OpKind,
    a: f64,
    b: f64,
}

impl Command {
    pub(crate) fn new(kind: OpKind, a: f64, b: f64) -> Self {
        Command { kind, a, b }
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    /// The captured operands in restore order: push `.0` first, then
    /// `.1`, and the operand that was popped first is back on top.
    pub fn restore_order(&self) -> (f64, f64) {
        (self.b, self.a)
    }
}
