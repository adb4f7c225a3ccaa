//! Full signed comparison of two `Number`s.

use std::cmp::Ordering;

use crate::cancel::Cancel;
use crate::error::Status;

use super::Number;
use super::digits::compare_aligned;

impl Number {
    /// Compares `self` to `other`, honoring sign, integer-part length,
    /// and fractional alignment.
    ///
    /// Polls `cancel` on every cell visited while scanning the shared
    /// digit span, returning `Status::ExecSignal` if it is set.
    pub fn compare(&self, other: &Number, cancel: &Cancel) -> Result<Ordering, Status> {
        if self.is_zero() {
            return Ok(if other.is_zero() {
                Ordering::Equal
            } else if other.neg {
                Ordering::Greater
            } else {
                Ordering::Less
            });
        } else if other.is_zero() {
            return Ok(if self.neg {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        }

        let both_neg = if self.neg != other.neg {
            return Ok(if self.neg {
                Ordering::Less
            } else {
                Ordering::Greater
            });
        } else {
            self.neg
        };

        let a_int = self.int_len();
        let b_int = other.int_len();
        if a_int != b_int {
            let magnitude_order = a_int.cmp(&b_int);
            return Ok(if both_neg {
                magnitude_order.reverse()
            } else {
                magnitude_order
            });
        }

        let (a_max, min_rdx, diff, max_slice, min_slice) = if self.rdx > other.rdx {
            (true, other.rdx, self.rdx - other.rdx, &self.digits, &other.digits)
        } else {
            (
                false,
                self.rdx,
                other.rdx - self.rdx,
                &other.digits,
                &self.digits,
            )
        };

        let shared_len = b_int + min_rdx;
        let cmp = compare_aligned(&max_slice[diff..diff + shared_len], min_slice, cancel)?;
        if cmp != Ordering::Equal {
            let magnitude_order = if a_max { cmp } else { cmp.reverse() };
            return Ok(if both_neg {
                magnitude_order.reverse()
            } else {
                magnitude_order
            });
        }

        for i in (0..diff).rev() {
            cancel.poll()?;
            if max_slice[i] != 0 {
                let magnitude_order = if a_max {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
                return Ok(if both_neg {
                    magnitude_order.reverse()
                } else {
                    magnitude_order
                });
            }
        }

        Ok(Ordering::Equal)
    }
}
