//! The [`Number`] type: an arbitrary-precision signed decimal value.
//!
//! A `Number` stores its digits least-significant-first in a `Vec<i8>`.
//! Cells at indices `[0, rdx)` form the fractional part; cells at
//! `[rdx, len)` form the integer part, where `len` is `digits.len()`.
//! `Vec` already owns the grow/realloc discipline the reference
//! implementation hand-rolls, so there is no separate tracked capacity
//! field: `with_capacity`/`reserve` simply forward to the vector.
//!
//! Every arithmetic operation on `Number` takes its operands by shared
//! reference and returns a freshly constructed `Number`. There is no
//! destination parameter that can alias a source operand, which is the
//! idiomatic-Rust replacement for the reference implementation's
//! aliasing-aware binary-operation wrapper.

use std::cmp::Ordering;
use std::fmt;

use crate::error::Status;

mod digits;

mod add;
mod cmp;
mod div;
mod magnitude;
mod modexp;
mod mul;
pub mod parse;
pub mod pow;
pub mod print;
mod sqrt;

pub use print::PrintOptions;

/// Minimum digit-buffer capacity requested for any `Number`, mirroring
/// the reference implementation's `BC_NUM_DEF_SIZE`.
pub const MIN_CAPACITY: usize = 16;

/// Upper bound on the number of digit cells a `Number` may hold.
///
/// This only guards against `usize` overflow in length arithmetic (see
/// `shift`); it is not a practical memory limit.
pub const MAX_NUM_LEN: usize = usize::MAX / 4;

/// Operand length, in cells, below which schoolbook multiplication is
/// used instead of Karatsuba.
pub const KARATSUBA_LEN: usize = 64;

/// Minimum input base accepted by [`Number::parse`].
pub const MIN_BASE: u32 = 2;

/// Maximum input base accepted by [`Number::parse`], and the base below
/// or at which [`Number::print`] emits one hexadecimal digit per cell.
pub const MAX_IBASE: u32 = 16;

/// Maximum output base accepted by [`Number::print`].
pub const MAX_OBASE: u32 = 999_999_999;

/// An arbitrary-precision signed decimal number.
///
/// See the [module documentation](self) for the representation and the
/// crate documentation for the supported operations.
#[derive(Clone, Debug)]
pub struct Number {
    /// Digit cells, least-significant first. Logically restricted to
    /// `0..=9`; transiently signed only inside borrow-propagation loops.
    digits: Vec<i8>,
    /// Number of fractional digit cells, i.e. the index of the radix point.
    rdx: usize,
    /// Sign. Must be `false` whenever `digits` is empty.
    neg: bool,
}

impl Number {
    /// Creates a zero-valued `Number` with at least `cap` cells of
    /// pre-allocated capacity.
    pub fn with_capacity(cap: usize) -> Number {
        Number {
            digits: Vec::with_capacity(cap.max(MIN_CAPACITY)),
            rdx: 0,
            neg: false,
        }
    }

    /// Reserves capacity for at least `cap` total cells.
    pub fn reserve(&mut self, cap: usize) {
        let cap = cap.max(MIN_CAPACITY);
        if cap > self.digits.len() {
            self.digits.reserve(cap - self.digits.len());
        }
    }

    /// The value zero, with `rdx` set to `scale` (preserving how many
    /// fractional digits the producer intended this zero to carry).
    pub fn zero_with_scale(scale: usize) -> Number {
        Number {
            digits: Vec::new(),
            rdx: scale,
            neg: false,
        }
    }

    /// The value zero at scale `0`.
    pub fn zero() -> Number {
        Number::zero_with_scale(0)
    }

    /// The value one.
    pub fn one() -> Number {
        Number {
            digits: vec![1],
            rdx: 0,
            neg: false,
        }
    }

    /// The value ten.
    pub fn ten() -> Number {
        Number {
            digits: vec![0, 1],
            rdx: 0,
            neg: false,
        }
    }

    /// Whether this value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Whether this value is negative. Always `false` for zero.
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    /// Whether this value is exactly `1` (sign and scale aside).
    pub(crate) fn is_one(&self) -> bool {
        self.int_len() == 1 && self.rdx == 0 && self.digits == [1]
    }

    /// The number of fractional digits currently stored.
    pub fn scale(&self) -> usize {
        self.rdx
    }

    /// The total number of significant digit cells stored.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// The number of integer-part digit cells.
    pub(crate) fn int_len(&self) -> usize {
        if self.digits.is_empty() {
            0
        } else {
            self.digits.len() - self.rdx
        }
    }

    /// Trims trailing (most-significant) zero cells, clears the sign if
    /// the value became zero, and restores `len >= rdx` if trimming
    /// dipped below the radix point.
    fn clean(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.neg = false;
        } else if self.digits.len() < self.rdx {
            self.digits.resize(self.rdx, 0);
        }
    }

    /// Inserts `places` zero cells at the low (fractional) end, growing
    /// both the length and `rdx` by `places`.
    fn extend(&mut self, places: usize) {
        if places == 0 {
            return;
        }
        let old_len = self.digits.len();
        self.digits.resize(old_len + places, 0);
        self.digits.copy_within(0..old_len, places);
        self.digits[0..places].fill(0);
        self.rdx += places;
    }

    /// Removes `places` low-order fractional cells.
    ///
    /// # Panics
    /// Panics (via `debug_assert!`) if `places > self.rdx`, or if
    /// `places` exceeds the stored length for a non-empty number. Both
    /// are internal programming-contract violations, never a consequence
    /// of untrusted input.
    pub fn truncate(&mut self, places: usize) {
        debug_assert!(places <= self.rdx);
        debug_assert!(self.digits.is_empty() || places <= self.digits.len());
        if places == 0 {
            return;
        }
        self.rdx -= places;
        if !self.digits.is_empty() {
            self.digits.drain(0..places);
        }
    }

    /// Multiplies by `10^places` by moving the radix point, extending
    /// with fractional zeros if there aren't enough fractional digits to
    /// absorb the shift.
    fn shift(&mut self, places: usize) -> Result<(), Status> {
        if places == 0 || self.digits.is_empty() {
            return Ok(());
        }
        if self.digits.len() + places > MAX_NUM_LEN {
            return Err(Status::NumLengthExceeded);
        }
        if self.rdx >= places {
            self.rdx -= places;
        } else {
            self.extend(places - self.rdx);
            self.rdx = 0;
        }
        self.clean();
        Ok(())
    }

    /// Converts this value to a `u64`.
    ///
    /// # Errors
    /// Returns `Status::MathNegative` if this value is negative, or
    /// `Status::MathOverflow` if the integer part does not fit in a
    /// `u64`. The fractional part, if any, is ignored (matching the
    /// reference implementation, which only ever calls this on already
    /// integer-valued numbers).
    pub fn to_u64(&self) -> Result<u64, Status> {
        if self.neg {
            return Err(Status::MathNegative);
        }
        let int_digits = &self.digits[self.rdx..];
        let mut result: u64 = 0;
        let mut pow: u64 = 1;
        for (i, &d) in int_digits.iter().enumerate() {
            let term = pow.checked_mul(d as u64).ok_or(Status::MathOverflow)?;
            result = result.checked_add(term).ok_or(Status::MathOverflow)?;
            if i + 1 < int_digits.len() {
                pow = pow.checked_mul(10).ok_or(Status::MathOverflow)?;
            }
        }
        Ok(result)
    }

    /// Adjusts `rdx` to exactly `scale`, extending with fractional zeros
    /// or truncating low cells as needed, then trims high zero cells.
    ///
    /// Shared by every scaled arithmetic operation in place of the
    /// reference implementation's combined "retire" step, split here so
    /// callers that must not overwrite the sign (the division remainder)
    /// can skip [`Number::apply_binary_sign`].
    pub(crate) fn retire(&mut self, scale: usize) {
        if self.rdx < scale {
            self.extend(scale - self.rdx);
        } else {
            self.truncate(self.rdx - scale);
        }
        self.clean();
    }

    /// Sets the sign to the XOR of `neg1`/`neg2`, unless the value is zero.
    pub(crate) fn apply_binary_sign(&mut self, neg1: bool, neg2: bool) {
        if !self.is_zero() {
            self.neg = neg1 != neg2;
        }
    }

    /// Builds a `Number` from a `u64`, least-significant digit first.
    pub fn from_u64(value: u64) -> Number {
        let mut n = Number::zero();
        if value == 0 {
            return n;
        }
        // u64::MAX has 20 decimal digits.
        n.digits.reserve(20);
        let mut v = value;
        while v > 0 {
            n.digits.push((v % 10) as i8);
            v /= 10;
        }
        n
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        // Equality never runs for an unbounded number of iterations in a
        // way that needs cancellation, so a throwaway token is fine here.
        let cancel = crate::cancel::Cancel::new();
        matches!(self.compare(other, &cancel), Ok(Ordering::Equal))
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal_string() {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}
