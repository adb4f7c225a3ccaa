//! Modular exponentiation via right-to-left binary exponentiation.

use crate::cancel::Cancel;
use crate::error::Status;

use super::Number;

impl Number {
    /// Computes `self^exp mod modulus`.
    ///
    /// # Errors
    /// Returns `Status::MathDivideByZero` if `modulus` is zero,
    /// `Status::MathNonInteger` if any operand carries fractional
    /// digits, or `Status::MathNegative` if `exp` is negative.
    pub fn modexp(&self, exp: &Number, modulus: &Number, cancel: &Cancel) -> Result<Number, Status> {
        if modulus.is_zero() {
            return Err(Status::MathDivideByZero);
        }
        if self.scale() != 0 || exp.scale() != 0 || modulus.scale() != 0 {
            return Err(Status::MathNonInteger);
        }
        if exp.is_negative() {
            return Err(Status::MathNegative);
        }

        let two = Number {
            digits: vec![2],
            rdx: 0,
            neg: false,
        };
        let mut result = Number::one();
        let mut base = self.rem(modulus, 0, cancel)?;
        let mut e = exp.clone();

        while !e.is_zero() {
            cancel.poll()?;
            let (quotient, remainder) = e.divmod(&two, 0, cancel)?;
            e = quotient;
            if remainder.is_one() {
                let product = result.mul(&base, 0, cancel)?;
                result = product.rem(modulus, 0, cancel)?;
            }
            let squared = base.mul(&base, 0, cancel)?;
            base = squared.rem(modulus, 0, cancel)?;
        }

        Ok(result)
    }
}
