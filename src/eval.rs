//! Evaluator for reckon - drives a calculator from parsed programs.
//!
//! The evaluator owns the calculator and keeps it alive between calls,
//! so a REPL session accumulates stack and history across lines:
//! - Push instructions feed operands to the calculator
//! - Operators run the recording arithmetic
//! - undo/redo walk the command histories

use crate::ast::{Instr, Program};
use crate::calc::{CalcError, Calculator};
use crate::display::{format_number, format_stack};

/// Result of evaluation
#[derive(Debug, Clone)]
pub struct EvalResult {
    /// The remaining stack rendered for display, bottom first
    pub output: String,
    /// Remaining stack (for inspection/debugging)
    pub stack: Vec<f64>,
}

/// Executes programs against a persistent calculator
pub struct Evaluator {
    calc: Calculator,
    /// Trace mode - print each instruction and the stack after it
    trace_mode: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            calc: Calculator::new(),
            trace_mode: std::env::var("RECKON_TRACE").is_ok(),
        }
    }

    /// Run a program to completion. Execution stops at the first failed
    /// instruction; whatever the calculator holds at that point is
    /// preserved for the next line.
    pub fn eval(&mut self, program: &Program) -> Result<EvalResult, CalcError> {
        for instr in &program.instructions {
            self.eval_instr(instr)?;
            if self.trace_mode {
                self.print_trace(instr);
            }
        }

        Ok(EvalResult {
            output: format_stack(self.calc.stack()),
            stack: self.calc.stack().to_vec(),
        })
    }

    fn eval_instr(&mut self, instr: &Instr) -> Result<(), CalcError> {
        match instr {
            Instr::Push(n) => self.calc.push(*n),
            Instr::Add => self.calc.add(),
            Instr::Subtract => self.calc.subtract(),
            Instr::Multiply => self.calc.multiply(),
            Instr::Divide => self.calc.divide(),
            Instr::Undo => self.calc.undo(),
            Instr::Redo => self.calc.redo(),
            Instr::Pop => self.calc.pop().map(|_| ()),
        }
    }

    /// Get a reference to the current stack (for prompts and hints)
    pub fn stack(&self) -> &[f64] {
        self.calc.stack()
    }

    /// Pop the top value off the stack, if any
    pub fn pop_value(&mut self) -> Option<f64> {
        self.calc.pop().ok()
    }

    /// Reset the calculator - stack and both histories
    pub fn reset(&mut self) {
        self.calc.reset();
    }

    pub fn undo_depth(&self) -> usize {
        self.calc.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.calc.redo_depth()
    }

    /// Enable or disable trace mode
    pub fn set_trace_mode(&mut self, enabled: bool) {
        self.trace_mode = enabled;
    }

    pub fn trace_mode(&self) -> bool {
        self.trace_mode
    }

    /// Print trace output showing the instruction and stack state
    fn print_trace(&self, instr: &Instr) {
        let stack = self.calc.stack();
        // Show the top 5 items, bottom first
        let start = stack.len().saturating_sub(5);
        let stack_str = if stack.is_empty() {
            "(empty)".to_string()
        } else {
            stack[start..]
                .iter()
                .map(|n| format_number(*n))
                .collect::<Vec<_>>()
                .join(" ")
        };

        eprintln!("\x1b[90m>>> {} │ {}\x1b[0m", instr, stack_str);
    }
}
