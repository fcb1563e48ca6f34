//! Display formatting for stack values.

/// Format a number for terminal display - no trailing .0 for integral
/// values, full precision for everything else.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Format the whole operand stack, bottom first, one value per line
pub fn format_stack(stack: &[f64]) -> String {
    stack
        .iter()
        .map(|n| format_number(*n))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integral() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(1e6), "1000000");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.4), "-0.4");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn test_format_infinite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_huge_magnitude() {
        // beyond i64 range, falls back to float formatting
        assert_eq!(format_number(1e19), "10000000000000000000");
    }

    #[test]
    fn test_format_empty_stack() {
        assert_eq!(format_stack(&[]), "");
    }

    #[test]
    fn test_format_stack_bottom_first() {
        assert_eq!(format_stack(&[2.0, 3.0, 0.5]), "2\n3\n0.5");
    }
}
