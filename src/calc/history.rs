//! Undo and redo over the command histories.

use super::{CalcError, Calculator};

impl Calculator {
    /// Reverse the most recent operation by pushing its captured
    /// operands back onto the stack, second pop first, so the operand
    /// that was on top before the operation is on top again. The
    /// command moves to the redo history. With no history this is a
    /// no-op, not an error.
    ///
    /// Usage: push(2); push(3); subtract(); pop(); undo()
    ///        -> stack [2, 3] again
    pub fn undo(&mut self) -> Result<(), CalcError> {
        if let Some(cmd) = self.undo_stack.pop() {
            let (first, second) = cmd.restore_order();
            self.stack.push(first)?;
            self.stack.push(second)?;
            self.redo_stack.push(cmd);
        }
        Ok(())
    }

    /// Re-apply the most recently undone operation: a fresh
    /// pop-compute-push of the same kind against the current stack.
    /// The command moves back to the undo history as-is - re-applying
    /// never mints a second record. With no history this is a no-op;
    /// if the stack can no longer support the operation the error
    /// propagates and the command stays redoable.
    pub fn redo(&mut self) -> Result<(), CalcError> {
        if let Some(cmd) = self.redo_stack.last().copied() {
            self.apply(cmd.kind())?;
            self.redo_stack.pop();
            self.undo_stack.push(cmd);
        }
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// How many operations can be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// How many undone operations can be re-applied.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
