//! Offset Fibonacci sequence
//!
//! Both base cases yield 1, so `f(i)` equals the conventional `fib(i + 1)`:
//! `1, 1, 2, 3, 5, 8, ...`

/// Recursive offset Fibonacci: `f(0) = f(1) = 1`, `f(i) = f(i-1) + f(i-2)`.
///
/// Exponential in `i`; only meant for small inputs.
pub fn fibonacci(i: u32) -> u64 {
    if i <= 1 {
        return 1;
    }
    fibonacci(i - 1) + fibonacci(i - 2)
}

/// Linear-time iterator over the same sequence as [`fibonacci`].
///
/// Ends instead of wrapping once the next value no longer fits in a `u64`.
#[derive(Debug, Clone)]
pub struct OffsetFibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl OffsetFibonacci {
    pub fn new() -> Self {
        OffsetFibonacci {
            current: Some(1),
            next: Some(1),
        }
    }
}

impl Default for OffsetFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for OffsetFibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current?;
        let following = match (self.current, self.next) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        self.current = self.next;
        self.next = following;
        Some(value)
    }
}
