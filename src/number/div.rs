//! Division, remainder, and combined divmod.

use std::cmp::Ordering;

use crate::cancel::Cancel;
use crate::error::Status;

use super::Number;
use super::digits::{compare_aligned, sub_arrays};

impl Number {
    /// Divides `self` by `other`, producing a quotient with `scale`
    /// fractional digits.
    pub fn div(&self, other: &Number, scale: usize, cancel: &Cancel) -> Result<Number, Status> {
        if other.is_zero() {
            return Err(Status::MathDivideByZero);
        }
        if self.is_zero() {
            return Ok(Number::zero_with_scale(scale));
        }
        if other.is_one() {
            let mut result = self.clone();
            result.retire(scale);
            result.apply_binary_sign(self.neg, other.neg);
            return Ok(result);
        }

        let mut result = long_divide(self, other, scale, cancel)?;
        result.retire(scale);
        result.apply_binary_sign(self.neg, other.neg);
        Ok(result)
    }

    /// Divides `self` by `other`, returning `(quotient, remainder)` both
    /// with `scale` fractional digits of precision in the division step.
    pub fn divmod(&self, other: &Number, scale: usize, cancel: &Cancel) -> Result<(Number, Number), Status> {
        if other.is_zero() {
            return Err(Status::MathDivideByZero);
        }
        if self.is_zero() {
            let ts = scale.max(self.rdx).max(other.rdx);
            return Ok((Number::zero_with_scale(scale), Number::zero_with_scale(ts)));
        }

        let ts = (scale + other.rdx).max(self.rdx);

        let mut quotient = long_divide(self, other, scale, cancel)?;
        quotient.retire(scale);
        quotient.apply_binary_sign(self.neg, other.neg);

        let mut remainder_scale = scale;
        if remainder_scale != 0 {
            remainder_scale = ts;
        }

        // The quotient carries its final sign already, so multiplying it
        // back out here reproduces the signed product the reference
        // implementation subtracts from `self` to recover the remainder.
        let product = quotient.mul(other, remainder_scale, cancel)?;
        let mut remainder = self.sub(&product, remainder_scale, cancel)?;
        if ts > remainder.rdx && !remainder.is_zero() {
            remainder.extend(ts - remainder.rdx);
        }
        remainder.retire(ts);

        Ok((quotient, remainder))
    }

    /// The remainder of dividing `self` by `other`.
    pub fn rem(&self, other: &Number, scale: usize, cancel: &Cancel) -> Result<Number, Status> {
        let (_, r) = self.divmod(other, scale, cancel)?;
        Ok(r)
    }
}

/// The unsigned long-division core: computes a quotient with `scale`
/// fractional digits of `a / b`, ignoring both operands' signs.
///
/// Ports the reference implementation's digit-at-a-time subtract-count
/// algorithm: align `a` and `b` so division reduces to repeated
/// subtraction of `b`'s magnitude from a sliding window of `a`'s digits.
fn long_divide(a: &Number, b: &Number, scale: usize, cancel: &Cancel) -> Result<Number, Status> {
    let mut cp_digits = a.digits.clone();
    let mut cp_rdx = a.rdx;

    let blen = b.digits.len();
    if blen > cp_digits.len() {
        extend_low(&mut cp_digits, &mut cp_rdx, blen - cp_digits.len());
    }
    if b.rdx > cp_rdx {
        extend_low(&mut cp_digits, &mut cp_rdx, b.rdx - cp_rdx);
    }
    cp_rdx -= b.rdx;
    if scale > cp_rdx {
        extend_low(&mut cp_digits, &mut cp_rdx, scale - cp_rdx);
    }

    let mut len = blen;
    if b.rdx == b.digits.len() {
        let mut k = 0;
        while k < len && b.digits[len - 1 - k] == 0 {
            k += 1;
        }
        len -= k;
    }

    cp_digits.push(0);
    let end = cp_digits.len() - len;

    let mut quotient = vec![0i8; cp_digits.len()];

    for i in (0..end).rev() {
        let mut q = 0i32;
        loop {
            cancel.poll()?;
            let overflow = cp_digits[i + len] != 0;
            let ge = overflow
                || compare_aligned(&cp_digits[i..i + len], &b.digits[..len], cancel)? != Ordering::Less;
            if !ge {
                break;
            }
            sub_arrays(&mut cp_digits[i..], &b.digits[..len], cancel)?;
            q += 1;
        }
        debug_assert!((0..=9).contains(&q));
        quotient[i] = q as i8;
    }

    Ok(Number {
        digits: quotient,
        rdx: cp_rdx,
        neg: false,
    })
}

/// Inserts `places` zero cells at the low end of a raw digit vector,
/// mirroring [`Number::extend`] for a buffer not yet wrapped in a
/// `Number`.
fn extend_low(v: &mut Vec<i8>, rdx: &mut usize, places: usize) {
    if places == 0 {
        return;
    }
    let old_len = v.len();
    v.resize(old_len + places, 0);
    v.copy_within(0..old_len, places);
    v[0..places].fill(0);
    *rdx += places;
}
