use log::trace;
use num_traits::Zero;

use crate::Coeff;
use super::Poly;

impl<R> Poly<R>
where R: Coeff {
    /// Substitutes `x` for `x_0`. The result is a polynomial in the
    /// remaining variables, shifted down: `p(x_0, x_1, ...) ↦ p(x, x_0, ...)`.
    pub fn eval(&self, x: R) -> Self {
        if self.is_const() {
            return self.clone()
        }

        let mut res = Self::zero();

        for t in self.iter() {
            let xe = x.pow_w(t.exp);

            match t.coeff.as_const() {
                Some(&c) => res.insert_term(Self::from_const(c.mul_w(xe)), 0),
                None => for s in t.coeff.iter() {
                    // x_1 of `self` becomes x_0 of `res`.
                    res.insert_term(s.coeff.scale(xe), s.exp)
                }
            }
        }

        trace!("eval at {x}: {} terms -> {} terms", self.nterms(), res.nterms());
        debug_assert!(res.is_canonical());

        res
    }

    /// Substitutes `xs[0], xs[1], ...` for `x_0, x_1, ...`.
    pub fn eval_many(&self, xs: &[R]) -> Self {
        xs.iter().fold(self.clone(), |p, &x| p.eval(x))
    }
}
