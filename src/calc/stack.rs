//! The operand stack - LIFO storage for the values being computed on.

use super::CalcError;

/// A stack of `f64` operands. Push and pop are the only mutations;
/// NaN never gets in, so every stored value is a defined number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an operand. NaN is the undefined value and is rejected.
    pub fn push(&mut self, value: f64) -> Result<(), CalcError> {
        if value.is_nan() {
            return Err(CalcError::InvalidOperand("push"));
        }
        self.values.push(value);
        Ok(())
    }

    /// Remove and return the top operand.
    pub fn pop(&mut self) -> Result<f64, CalcError> {
        self.values.pop().ok_or(CalcError::EmptyStack)
    }

    /// The top two operands in pop order (top first), without removing
    /// them. Arithmetic validates through this before committing.
    pub(crate) fn top_two(&self) -> Option<(f64, f64)> {
        let len = self.values.len();
        if len < 2 {
            return None;
        }
        Some((self.values[len - 1], self.values[len - 2]))
    }

    /// Stack contents, bottom first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
