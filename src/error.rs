//! Error taxonomy shared by every fallible operation in the crate.
//!
//! The engine never unwinds on malformed *input*: every operation that
//! can fail returns `Result<T, Status>`. Internal invariant violations
//! (a contract the crate itself is responsible for, not the caller) use
//! `debug_assert!` instead, the same role the reference implementation's
//! C `assert()` calls play.

use std::fmt;

/// The status taxonomy for fallible engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A request whose size cannot be represented in `usize` arithmetic.
    AllocError,
    /// Writing to a caller-supplied sink failed during `print`/`stream`.
    IoError,
    /// A long-running loop observed the cancellation token.
    ExecSignal,
    /// A shift or multiplication would exceed the engine's maximum digit count.
    NumLengthExceeded,
    /// Division, remainder, or modular exponentiation by zero.
    MathDivideByZero,
    /// A negative operand where the operation requires a non-negative one.
    MathNegative,
    /// An operand with a non-zero `rdx` where an integer is required.
    MathNonInteger,
    /// A value exceeds the range of the target machine integer type.
    MathOverflow,
    /// A malformed numeric literal was passed to `parse`.
    MathBadString,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Status::AllocError => "allocation request too large",
            Status::IoError => "write to output sink failed",
            Status::ExecSignal => "computation was cancelled",
            Status::NumLengthExceeded => "number length exceeds the engine maximum",
            Status::MathDivideByZero => "division by zero",
            Status::MathNegative => "negative number where non-negative is required",
            Status::MathNonInteger => "non-integer value where an integer is required",
            Status::MathOverflow => "value exceeds the range of the target integer type",
            Status::MathBadString => "malformed numeric literal",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Status {}
