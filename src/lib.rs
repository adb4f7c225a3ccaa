//! Arbitrary-precision decimal arithmetic core for a `bc`/`dc`-style calculator
//!
//! This crate provides the numeric engine behind a `bc`/`dc`-style
//! calculator: unbounded-precision signed decimal numbers represented as
//! radix-10 digit sequences with an explicit fractional point (a *radix
//! point*, tracked as a digit count rather than a floating exponent).
//!
//! The focus is on **clarity, correctness, and auditability** of the
//! numeric semantics mandated by the `bc`/`dc` specifications: scale-
//! sensitive truncation, radix-point tracking, and signed-zero handling.
//! A lexer, parser, bytecode interpreter, and CLI are explicitly out of
//! scope; this crate only ever consumes and produces [`Number`] values.
//!
//! # Module overview
//!
//! - [`number`]
//!   The [`Number`] type and every arithmetic operation defined on it:
//!   addition, subtraction, comparison, multiplication (with a Karatsuba
//!   fast path), long division, remainder, integer exponentiation, square
//!   root, and modular exponentiation.
//!
//! - [`error`]
//!   The [`Status`] error taxonomy shared by every fallible operation in
//!   the crate.
//!
//! - [`cancel`]
//!   A cooperative cancellation token ([`Cancel`]) that long-running
//!   loops (addition, multiplication, division, Newton iteration) poll so
//!   an embedder can interrupt a runaway computation.
//!
//! # Design goals
//!
//! - No silent truncation or rounding surprises: every scale-sensitive
//!   operation takes its target scale explicitly.
//! - Binary operations are value-returning (`fn op(&self, other: &Number,
//!   ...) -> Result<Number, Status>`), so there is no destination operand
//!   that can alias a source operand.
//! - Stable, well-defined semantics matching the reference `bc`/`dc`
//!   implementation bit-for-bit on the scenarios in the test suite.
//!
//! This crate is not a general-purpose bignum library: it has no
//! floating-point conversion, no transcendental functions beyond integer
//! power and square root, and no fixed-width or SIMD fast paths.

pub mod cancel;
pub mod error;
pub mod number;

pub use cancel::Cancel;
pub use error::Status;
pub use number::Number;
