use std::fmt::{Debug, Display};
use std::hash::Hash;
use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};

// Coefficients are fixed-width signed integers.
// All arithmetic on them wraps (two's complement), overflow is never reported.

pub trait Coeff:
    PrimInt +
    Signed +
    WrappingAdd +
    WrappingSub +
    WrappingMul +
    WrappingNeg +
    Hash +
    Default +
    Send +
    Sync +
    Display +
    Debug +
    'static
{
    fn add_w(self, rhs: Self) -> Self {
        self.wrapping_add(&rhs)
    }

    fn mul_w(self, rhs: Self) -> Self {
        self.wrapping_mul(&rhs)
    }

    fn neg_w(self) -> Self {
        self.wrapping_neg()
    }

    /// `self^e` by repeated squaring, `O(log e)` multiplications.
    /// `0^0 = 1`.
    fn pow_w(self, e: usize) -> Self {
        let mut res = Self::one();
        let mut base = self;
        let mut e = e;
        while e > 0 {
            if e & 1 == 1 {
                res = res.mul_w(base);
            }
            e >>= 1;
            if e > 0 {
                base = base.mul_w(base);
            }
        }
        res
    }
}

macro_rules! impl_coeff {
    ($($t:ty),*) => {
        $(impl Coeff for $t {})*
    };
}

impl_coeff!(i8, i16, i32, i64, i128, isize);
