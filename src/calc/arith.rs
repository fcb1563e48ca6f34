//! The four arithmetic operations.
//!
//! All of them share one pop-two-push-one path: validate first, then
//! pop both operands, push the result, and record a [`Command`]. A
//! failed operation leaves the stack and both histories untouched.

use super::{CalcError, Calculator, Command, OpKind};

impl Calculator {
    /// Pop two operands and push their sum.
    ///
    /// Usage: push(5); push(3); add() -> stack [8]
    pub fn add(&mut self) -> Result<(), CalcError> {
        self.operate(OpKind::Add)
    }

    /// Pop two operands and push second minus first, so the earlier
    /// push is the minuend.
    ///
    /// Usage: push(10); push(3); subtract() -> stack [7]
    pub fn subtract(&mut self) -> Result<(), CalcError> {
        self.operate(OpKind::Subtract)
    }

    /// Pop two operands and push their product.
    ///
    /// Usage: push(4); push(5); multiply() -> stack [20]
    pub fn multiply(&mut self) -> Result<(), CalcError> {
        self.operate(OpKind::Multiply)
    }

    /// Pop two operands and push first divided by second: the value on
    /// top of the stack is the dividend. Fails with `DivideByZero` when
    /// the second pop is zero, before anything is popped.
    ///
    /// Usage: push(2); push(10); divide() -> stack [5]
    pub fn divide(&mut self) -> Result<(), CalcError> {
        self.operate(OpKind::Divide)
    }

    /// Run one operation forward and record it, clearing the redo
    /// history - undone work cannot be redone once the timeline forks.
    fn operate(&mut self, kind: OpKind) -> Result<(), CalcError> {
        let cmd = self.apply(kind)?;
        self.redo_stack.clear();
        self.undo_stack.push(cmd);
        Ok(())
    }

    /// The shared stack effect: check both operands are present, check
    /// the result is representable, then pop twice and push once.
    /// Returns the record of what was consumed; recording policy is the
    /// caller's business (redo re-applies through here without making a
    /// fresh record).
    pub(crate) fn apply(&mut self, kind: OpKind) -> Result<Command, CalcError> {
        let (a, b) = self
            .stack
            .top_two()
            .ok_or(CalcError::MissingOperands(kind.name()))?;
        if kind == OpKind::Divide && b == 0.0 {
            return Err(CalcError::DivideByZero);
        }
        let result = kind.forward(a, b);
        if result.is_nan() {
            return Err(CalcError::InvalidOperand(kind.name()));
        }
        self.stack.pop()?;
        self.stack.pop()?;
        self.stack.push(result)?;
        Ok(Command::new(kind, a, b))
    }
}
