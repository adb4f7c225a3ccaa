//! Multiplicative core.

use crate::cancel::Cancel;
use crate::error::Status;

use super::Number;
use super::magnitude::mul_unsigned;

impl Number {
    /// Multiplies `self` by `other`, truncated or extended to `scale`
    /// fractional digits.
    pub fn mul(&self, other: &Number, scale: usize, cancel: &Cancel) -> Result<Number, Status> {
        let mut target_scale = scale.max(self.rdx).max(other.rdx);
        target_scale = target_scale.min(self.rdx + other.rdx);
        // `target_scale` is already >= max(self.rdx, other.rdx) by
        // construction, so this mirrors the reference implementation's
        // second `maxrdx` update without changing its value.
        let shift_rdx = self.rdx.max(other.rdx).max(target_scale);

        let mut a_mag = self.clone();
        a_mag.shift(shift_rdx)?;
        let mut b_mag = other.clone();
        b_mag.shift(shift_rdx)?;

        let mut product = mul_unsigned(&a_mag.digits, &b_mag.digits, cancel)?;

        let combined_rdx = shift_rdx + target_scale;
        if product.len() < combined_rdx {
            product.resize(combined_rdx, 0);
        }

        let mut result = Number {
            digits: product,
            rdx: combined_rdx,
            neg: false,
        };
        result.truncate(shift_rdx);
        result.clean();
        result.apply_binary_sign(self.neg, other.neg);
        Ok(result)
    }
}
