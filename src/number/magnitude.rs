//! Unsigned bignum kernel shared by the multiplicative core.
//!
//! These helpers work on plain least-significant-first `i8` digit
//! vectors with no notion of sign or radix point; [`super::mul`] is
//! responsible for shifting operands to integers before calling in
//! here and shifting the product back afterwards.

use crate::cancel::Cancel;
use crate::error::Status;

use super::KARATSUBA_LEN;

/// Drops trailing (most-significant) zero cells.
fn trim(v: &mut Vec<i8>) {
    while v.last() == Some(&0) {
        v.pop();
    }
}

/// `a + b`, both least-significant first, any lengths.
fn add(a: &[i8], b: &[i8]) -> Vec<i8> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0i8;
    for i in 0..len {
        let sum = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0) + carry;
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
    out
}

/// `a - b`, assuming `a >= b` as naturals. Both least-significant first.
fn sub(a: &[i8], b: &[i8]) -> Vec<i8> {
    let mut out = a.to_vec();
    let mut borrow = 0i8;
    for i in 0..out.len() {
        let mut d = out[i] - b.get(i).copied().unwrap_or(0) - borrow;
        if d < 0 {
            d += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out[i] = d;
    }
    trim(&mut out);
    out
}

/// Shifts `v` up by `places` cells (multiplies by `10^places`).
fn shift_up(v: &[i8], places: usize) -> Vec<i8> {
    if v.is_empty() || places == 0 {
        return v.to_vec();
    }
    let mut out = vec![0i8; places];
    out.extend_from_slice(v);
    out
}

/// Naive O(n*m) schoolbook multiplication.
fn mul_schoolbook(a: &[i8], b: &[i8], cancel: &Cancel) -> Result<Vec<i8>, Status> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = vec![0i32; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        cancel.poll()?;
        let mut carry = 0i32;
        for (j, &bj) in b.iter().enumerate() {
            let pos = i + j;
            let v = out[pos] + ai as i32 * bj as i32 + carry;
            out[pos] = v % 10;
            carry = v / 10;
        }
        let mut pos = i + b.len();
        while carry != 0 {
            let v = out[pos] + carry;
            out[pos] = v % 10;
            carry = v / 10;
            pos += 1;
        }
    }
    let mut result: Vec<i8> = out.into_iter().map(|d| d as i8).collect();
    trim(&mut result);
    Ok(result)
}

/// Splits `v` into `(low, high)` at `at` cells, both least-significant
/// first, such that `v == low + high * 10^at`.
fn split(v: &[i8], at: usize) -> (Vec<i8>, Vec<i8>) {
    if v.len() <= at {
        return (v.to_vec(), Vec::new());
    }
    let mut low = v[..at].to_vec();
    trim(&mut low);
    let high = v[at..].to_vec();
    (low, high)
}

/// Karatsuba multiplication, falling back to schoolbook below
/// [`KARATSUBA_LEN`].
pub(crate) fn mul_unsigned(a: &[i8], b: &[i8], cancel: &Cancel) -> Result<Vec<i8>, Status> {
    if a.len() < KARATSUBA_LEN || b.len() < KARATSUBA_LEN {
        return mul_schoolbook(a, b, cancel);
    }
    cancel.poll()?;

    let mid = a.len().max(b.len()) / 2;
    let (a_lo, a_hi) = split(a, mid);
    let (b_lo, b_hi) = split(b, mid);

    let z0 = mul_unsigned(&a_lo, &b_lo, cancel)?;
    let z2 = mul_unsigned(&a_hi, &b_hi, cancel)?;

    let a_sum = add(&a_lo, &a_hi);
    let b_sum = add(&b_lo, &b_hi);
    let z1_full = mul_unsigned(&a_sum, &b_sum, cancel)?;
    let z1 = sub(&sub(&z1_full, &z0), &z2);

    let mut result = z0;
    let z1_shifted = shift_up(&z1, mid);
    let z2_shifted = shift_up(&z2, 2 * mid);
    result = add(&result, &z1_shifted);
    result = add(&result, &z2_shifted);
    trim(&mut result);
    Ok(result)
}
