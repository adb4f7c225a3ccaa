//! Square root via Newton's method.

use std::cmp::Ordering;

use crate::cancel::Cancel;
use crate::error::Status;

use super::Number;

impl Number {
    /// The square root of `self`, truncated to `scale` fractional digits.
    ///
    /// # Errors
    /// Returns `Status::MathNegative` if `self` is negative.
    pub fn sqrt(&self, scale: usize, cancel: &Cancel) -> Result<Number, Status> {
        if self.is_zero() {
            return Ok(Number::zero_with_scale(scale));
        }
        if self.is_negative() {
            return Err(Status::MathNegative);
        }
        if self.is_one() {
            let mut one = Number::one();
            one.extend(scale);
            return Ok(one);
        }

        let int_len = self.int_len();
        let mut x0 = Number::one();
        if int_len != 0 {
            let digit = if int_len % 2 == 1 { 2 } else { 6 };
            let adj = int_len - (2 - (int_len % 2));
            let mut digits = vec![0i8; adj + 1];
            digits[adj] = digit;
            x0 = Number {
                digits,
                rdx: 0,
                neg: false,
            };
        }

        let half = Number {
            digits: vec![5],
            rdx: 1,
            neg: false,
        };

        let final_scale = scale.max(self.rdx);
        let scale_adj = final_scale + 1;
        let mut resrdx = scale_adj + 2;
        let target_len = x0.int_len() + resrdx - 1;

        let mut x1 = x0.clone();
        let mut cmp = Ordering::Greater;
        let mut cmp1 = None;
        let mut cmp2 = None;
        let mut digit_count = 0usize;
        let mut digit_count1 = 0usize;
        let mut times = 0u32;

        while cmp != Ordering::Equal || digit_count < target_len {
            cancel.poll()?;

            let f = self.div(&x0, resrdx, cancel)?;
            let fprime = x0.add(&f, resrdx, cancel)?;
            x1 = fprime.mul(&half, resrdx, cancel)?;

            cmp = x1.compare(&x0, cancel)?;
            // The reference implementation tracks convergence via the
            // raw magnitude of its signed compare; ours normalizes that
            // to an `Ordering`, so here the proxy for "digits settled"
            // is simply the candidate's own digit count.
            let new_digit_count = x1.len();

            if cmp1 == Some(cmp) && new_digit_count == digit_count1 {
                times += 1;
            } else {
                times = 0;
            }
            if times > 4 {
                resrdx += 1;
            }

            cmp2 = cmp1;
            cmp1 = Some(cmp);
            digit_count1 = digit_count;
            digit_count = new_digit_count;

            std::mem::swap(&mut x0, &mut x1);
        }
        let _ = cmp2;

        let mut result = x0;
        if result.rdx > final_scale {
            result.truncate(result.rdx - final_scale);
        }
        Ok(result)
    }
}
