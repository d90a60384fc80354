use num_traits::Zero;

use crate::Coeff;
use super::Poly;

impl<R> Poly<R>
where R: Coeff {
    /// Total degree, `-1` for the zero polynomial.
    pub fn deg(&self) -> isize {
        if self.is_zero() {
            return -1
        }
        self.iter()
            .map(|t| {
                // exponents are at most `MAX_EXP`, so the cast is lossless.
                let Some(d) = (t.exp as isize).checked_add(t.coeff.deg()) else {
                    panic!("total degree exceeds {}", isize::MAX)
                };
                d
            })
            .max()
            .unwrap_or(0)
    }

    /// Degree in the variable `x_k`, `-1` for the zero polynomial.
    pub fn deg_for(&self, k: usize) -> isize {
        if self.is_zero() {
            -1
        } else if k == 0 {
            // terms are sorted, the last one has the highest exponent.
            self.terms().last().map_or(0, |t| t.exp as isize)
        } else {
            self.iter()
                .map(|t| t.coeff.deg_for(k - 1))
                .max()
                .unwrap_or(0)
        }
    }
}
