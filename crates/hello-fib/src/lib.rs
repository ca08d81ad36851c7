//! hello-fib Library
//!
//! Prints a greeting, the result of a fixed conditional, and the offset
//! Fibonacci values for 0 through 10.
//!
//! ```rust
//! let mut out = Vec::new();
//! hello_fib::run(&mut out).unwrap();
//! assert!(out.starts_with(b"Hello, World!\n"));
//! ```

pub mod fibonacci;
pub mod program;

pub use fibonacci::{OffsetFibonacci, fibonacci};
pub use program::{GREETING, LAST_INDEX, format_fibonacci_line, run, select_branch};
