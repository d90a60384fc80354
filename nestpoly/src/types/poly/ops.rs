use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use auto_impl_ops::auto_ops;
use num_traits::{One, Zero};

use crate::Coeff;
use super::Poly;
use super::add::{add, neg, sub};
use super::mul::mul;

impl<R> Neg for Poly<R>
where R: Coeff {
    type Output = Self;
    fn neg(self) -> Self::Output {
        neg(&self)
    }
}

impl<R> Neg for &Poly<R>
where R: Coeff {
    type Output = Poly<R>;
    fn neg(self) -> Self::Output {
        neg(self)
    }
}

// `&p op &q` is the primitive, the owned and assign variants are derived from it.
macro_rules! impl_binop {
    ($trait:ident, $method:ident, $f:ident) => {
        #[auto_ops]
        impl<'a, 'b, R> $trait<&'b Poly<R>> for &'a Poly<R>
        where R: Coeff {
            type Output = Poly<R>;
            fn $method(self, rhs: &'b Poly<R>) -> Self::Output {
                $f(self, rhs)
            }
        }
    };
}

impl_binop!(Add, add, add);
impl_binop!(Sub, sub, sub);
impl_binop!(Mul, mul, mul);

impl<R> Sum for Poly<R>
where R: Coeff {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |res, p| add(&res, &p))
    }
}

impl<'a, R> Sum<&'a Poly<R>> for Poly<R>
where R: Coeff {
    fn sum<I: Iterator<Item = &'a Poly<R>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |res, p| add(&res, p))
    }
}

impl<R> Product for Poly<R>
where R: Coeff {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |res, p| mul(&res, &p))
    }
}

impl<'a, R> Product<&'a Poly<R>> for Poly<R>
where R: Coeff {
    fn product<I: Iterator<Item = &'a Poly<R>>>(iter: I) -> Self {
        iter.fold(Self::one(), |res, p| mul(&res, p))
    }
}
