//! Integer exponentiation by square-and-multiply.

use crate::cancel::Cancel;
use crate::error::Status;

use super::Number;

impl Number {
    /// Raises `self` to the integer power `exp`, truncated or extended
    /// to `scale` fractional digits.
    ///
    /// # Errors
    /// Returns `Status::MathNonInteger` if `exp` carries fractional
    /// digits. A negative `exp` computes `1 / self^|exp|` and so can
    /// return any error `Number::div` can.
    pub fn pow(&self, exp: &Number, scale: usize, cancel: &Cancel) -> Result<Number, Status> {
        if exp.scale() != 0 {
            return Err(Status::MathNonInteger);
        }
        if exp.is_zero() {
            return Ok(Number::one());
        }
        if self.is_zero() {
            return Ok(Number::zero_with_scale(scale));
        }
        if exp.is_one() {
            return if !exp.is_negative() {
                Ok(self.clone())
            } else {
                self.inv(scale, cancel)
            };
        }

        let neg = exp.is_negative();
        let mut exp_mag = exp.clone();
        exp_mag.neg = false;
        let mut pow_val = exp_mag.to_u64()?;

        let mut scale = scale;
        if !neg {
            let full = self
                .rdx
                .checked_mul(pow_val as usize)
                .ok_or(Status::NumLengthExceeded)?;
            scale = full.min(scale.max(self.rdx));
        }

        let mut copy = self.clone();
        let mut powrdx = self.rdx;

        while pow_val & 1 == 0 {
            cancel.poll()?;
            powrdx = powrdx.checked_mul(2).ok_or(Status::NumLengthExceeded)?;
            copy = copy.mul(&copy, powrdx, cancel)?;
            pow_val >>= 1;
        }

        let mut result = copy.clone();
        let mut resrdx = powrdx;
        pow_val >>= 1;

        while pow_val != 0 {
            cancel.poll()?;
            powrdx = powrdx.checked_mul(2).ok_or(Status::NumLengthExceeded)?;
            copy = copy.mul(&copy, powrdx, cancel)?;
            if pow_val & 1 == 1 {
                resrdx = resrdx
                    .checked_add(powrdx)
                    .ok_or(Status::NumLengthExceeded)?;
                result = result.mul(&copy, resrdx, cancel)?;
            }
            pow_val >>= 1;
        }

        if neg {
            result = result.inv(scale, cancel)?;
        }

        if result.rdx > scale {
            result.truncate(result.rdx - scale);
        }
        if result.is_zero() {
            result = Number::zero_with_scale(scale);
        }

        Ok(result)
    }

    /// `1 / self`, at `scale` fractional digits.
    pub(crate) fn inv(&self, scale: usize, cancel: &Cancel) -> Result<Number, Status> {
        Number::one().div(self, scale, cancel)
    }
}
