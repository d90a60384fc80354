use itertools::Itertools;
use log::trace;
use num_traits::{One, Pow, Zero};

use crate::Coeff;
use super::{Poly, Term};

pub(super) fn mul<R>(p: &Poly<R>, q: &Poly<R>) -> Poly<R>
where R: Coeff {
    if p.is_zero() || q.is_zero() {
        return Poly::zero()
    }

    match (p.as_const(), q.as_const()) {
        (Some(&a), Some(&b)) => Poly::from_const(a.mul_w(b)),
        (Some(&a), None) => q.scale(a),
        (None, Some(&b)) => p.scale(b),
        (None, None) => {
            let terms = p.iter()
                .cartesian_product(q.iter())
                .map(|(s, t)| Term::new(s.exp + t.exp, mul(&s.coeff, &t.coeff)))
                .collect_vec();

            Poly::add_many_terms(terms)
        }
    }
}

impl<R> Poly<R>
where R: Coeff {
    /// Sums an unsorted collection of terms: sorts by exponent,
    /// then merges runs of equal exponents.
    pub fn add_many_terms(mut terms: Vec<Term<R>>) -> Self {
        let n = terms.len();

        // order among equal exponents is irrelevant, they are summed.
        terms.sort_unstable_by_key(|t| t.exp);

        let merged = terms.into_iter()
            .coalesce(|s, t|
                if s.exp == t.exp {
                    Ok(Term::new(s.exp, s.coeff + t.coeff))
                } else {
                    Err((s, t))
                }
            )
            .collect_vec();

        trace!("collapse: {n} -> {} terms", merged.len());

        Self::from_raw_terms(merged)
    }
}

impl<R> Pow<usize> for &Poly<R>
where R: Coeff {
    type Output = Poly<R>;

    fn pow(self, n: usize) -> Self::Output {
        let mut res = Poly::one();
        let mut base = self.clone();
        let mut n = n;
        while n > 0 {
            if n & 1 == 1 {
                res = mul(&res, &base);
            }
            n >>= 1;
            if n > 0 {
                base = mul(&base, &base);
            }
        }
        res
    }
}
