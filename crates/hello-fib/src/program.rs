//! Program entry sequence
//!
//! Writes the greeting, the conditional result, then one line per
//! Fibonacci index. Everything goes through a generic writer so the
//! binary can hand in stdout and tests can hand in a buffer.

use crate::fibonacci::fibonacci;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Greeting printed before anything else
pub const GREETING: &str = "Hello, World!";

/// Inclusive upper bound of the Fibonacci loop
pub const LAST_INDEX: u32 = 10;

/// Operand compared against zero; fixed at 1
const CONDITION_OPERAND: i32 = 1;

/// Ternary-style choice: 10 when `x` is zero, 20 otherwise
pub fn select_branch(x: i32) -> i32 {
    if x == 0 { 10 } else { 20 }
}

/// Format one loop line, index right-aligned to width 2
pub fn format_fibonacci_line(i: u32, value: u64) -> String {
    format!("fibonacci({:>2}) = {}", i, value)
}

/// Write the full program output to `out`
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    debug!("writing greeting");
    writeln!(out, "{}", GREETING)?;

    let a = select_branch(CONDITION_OPERAND);
    debug!(x = CONDITION_OPERAND, a, "conditional evaluated");
    writeln!(out, "a = {}", a)?;

    let mut i = 0;
    while i <= LAST_INDEX {
        let value = fibonacci(i);
        trace!(i, value, "fibonacci line");
        writeln!(out, "{}", format_fibonacci_line(i, value))?;
        i += 1;
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_OUTPUT: &str = "Hello, World!
a = 20
fibonacci( 0) = 1
fibonacci( 1) = 1
fibonacci( 2) = 2
fibonacci( 3) = 3
fibonacci( 4) = 5
fibonacci( 5) = 8
fibonacci( 6) = 13
fibonacci( 7) = 21
fibonacci( 8) = 34
fibonacci( 9) = 55
fibonacci(10) = 89
";

    #[test]
    fn test_select_branch() {
        assert_eq!(select_branch(CONDITION_OPERAND), 20);
        assert_eq!(select_branch(1), 20);
        assert_eq!(select_branch(-3), 20);
        assert_eq!(select_branch(0), 10);
    }

    #[test]
    fn test_line_pads_single_digit_index() {
        assert_eq!(format_fibonacci_line(0, 1), "fibonacci( 0) = 1");
        assert_eq!(format_fibonacci_line(7, 21), "fibonacci( 7) = 21");
    }

    #[test]
    fn test_line_two_digit_index_unpadded() {
        assert_eq!(format_fibonacci_line(10, 89), "fibonacci(10) = 89");
        // width is a minimum, not a truncation
        assert_eq!(format_fibonacci_line(123, 5), "fibonacci(123) = 5");
    }

    #[test]
    fn test_run_exact_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_OUTPUT);
    }

    #[test]
    fn test_run_line_count() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 13);
        assert!(text.ends_with('\n'));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_propagates_write_error() {
        let err = run(&mut FailingWriter).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
