//! Common test utilities for reckon integration tests

pub use reckon::{lex, parse, Evaluator};

/// Helper to evaluate reckon input and return the formatted stack
pub fn eval(input: &str) -> Result<String, String> {
    let tokens = lex(input).map_err(|e| e.to_string())?;
    if tokens.is_empty() {
        return Ok(String::new());
    }
    let program = parse(tokens).map_err(|e| e.to_string())?;
    let mut evaluator = Evaluator::new();
    let result = evaluator.eval(&program).map_err(|e| e.to_string())?;
    Ok(result.output)
}

/// Helper to evaluate and return the final stack values
#[allow(dead_code)]
pub fn eval_stack(input: &str) -> Vec<f64> {
    let tokens = lex(input).unwrap();
    if tokens.is_empty() {
        return Vec::new();
    }
    let program = parse(tokens).unwrap();
    let mut evaluator = Evaluator::new();
    let result = evaluator.eval(&program).unwrap();
    result.stack
}
