//! Additive core: sign-aware dispatch to unsigned add / unsigned subtract.

use std::cmp::Ordering;

use crate::cancel::Cancel;
use crate::error::Status;

use super::Number;
use super::digits::sub_arrays;

impl Number {
    /// Adds `self` and `other`.
    ///
    /// `scale` is accepted for symmetry with the other scaled operations
    /// but ignored: the result's `rdx` is always `max(self.rdx,
    /// other.rdx)`, exactly as the reference implementation defines it.
    pub fn add(&self, other: &Number, _scale: usize, cancel: &Cancel) -> Result<Number, Status> {
        if self.neg == other.neg {
            unsigned_add(self, other, self.neg, cancel)
        } else {
            unsigned_sub(self, other, false, cancel)
        }
    }

    /// Subtracts `other` from `self`.
    pub fn sub(&self, other: &Number, _scale: usize, cancel: &Cancel) -> Result<Number, Status> {
        if self.neg == other.neg {
            unsigned_sub(self, other, true, cancel)
        } else {
            unsigned_add(self, other, self.neg, cancel)
        }
    }
}

/// Returns `n`'s digits re-expressed over `rdx` fractional cells and
/// `int_len` integer cells, padding with zeros on whichever side is
/// short. `rdx >= n.rdx` and `int_len >= n.int_len()` are required.
fn align(n: &Number, rdx: usize, int_len: usize) -> Vec<i8> {
    let mut out = vec![0i8; rdx + int_len];
    let low = rdx - n.rdx;
    out[low..low + n.digits.len()].copy_from_slice(&n.digits);
    out
}

/// Adds the magnitudes of `a` and `b`, aligning on their radix points,
/// and assigns the result the sign `result_neg`.
fn unsigned_add(a: &Number, b: &Number, result_neg: bool, cancel: &Cancel) -> Result<Number, Status> {
    let rdx = a.rdx.max(b.rdx);

    if a.is_zero() {
        let mut r = b.clone();
        if r.rdx < rdx {
            r.extend(rdx - r.rdx);
        }
        r.neg = if r.is_zero() { false } else { result_neg };
        return Ok(r);
    } else if b.is_zero() {
        let mut r = a.clone();
        if r.rdx < rdx {
            r.extend(rdx - r.rdx);
        }
        r.neg = if r.is_zero() { false } else { result_neg };
        return Ok(r);
    }

    let int_len = a.int_len().max(b.int_len());

    let a_aligned = align(a, rdx, int_len);
    let b_aligned = align(b, rdx, int_len);

    let mut out = Vec::with_capacity(a_aligned.len() + 1);
    let mut carry = 0i8;
    for i in 0..a_aligned.len() {
        cancel.poll()?;
        let sum = a_aligned[i] + b_aligned[i] + carry;
        if sum >= 10 {
            out.push(sum - 10);
            carry = 1;
        } else {
            out.push(sum);
            carry = 0;
        }
    }
    if carry != 0 {
        out.push(carry);
    }

    let mut result = Number {
        digits: out,
        rdx,
        neg: result_neg,
    };
    result.clean();
    Ok(result)
}

/// Subtracts the smaller magnitude from the larger of `a` and `b`.
///
/// When `sub` is `true` this implements `a - b`; when `false`, `a + b`
/// with opposite signs (so the "larger minus smaller" framing still
/// applies, with `b`'s effective sign flipped for the purpose of
/// picking the result sign).
fn unsigned_sub(a: &Number, b: &Number, sub: bool, cancel: &Cancel) -> Result<Number, Status> {
    let rdx0 = a.rdx.max(b.rdx);
    if a.is_zero() {
        let mut r = b.clone();
        if r.rdx < rdx0 {
            r.extend(rdx0 - r.rdx);
        }
        if sub && !r.is_zero() {
            r.neg = !r.neg;
        }
        return Ok(r);
    } else if b.is_zero() {
        let mut r = a.clone();
        if r.rdx < rdx0 {
            r.extend(rdx0 - r.rdx);
        }
        return Ok(r);
    }

    let a_was_neg = a.neg;
    let b_was_neg = b.neg;
    let mut a_mag = a.clone();
    let mut b_mag = b.clone();
    a_mag.neg = false;
    b_mag.neg = false;
    let cmp = a_mag.compare(&b_mag, cancel)?;

    if cmp == Ordering::Equal {
        return Ok(Number::zero_with_scale(a.rdx.max(b.rdx)));
    }

    let rdx = a.rdx.max(b.rdx);
    let int_len = a.int_len().max(b.int_len());

    let (larger, smaller, result_neg) = if cmp == Ordering::Greater {
        (a, b, a_was_neg)
    } else {
        let neg = if sub { !b_was_neg } else { b_was_neg };
        (b, a, neg)
    };

    let mut minuend = align(larger, rdx, int_len);
    let subtrahend = align(smaller, rdx, int_len);

    sub_arrays(&mut minuend, &subtrahend, cancel)?;

    let mut result = Number {
        digits: minuend,
        rdx,
        neg: result_neg,
    };
    result.clean();
    Ok(result)
}
