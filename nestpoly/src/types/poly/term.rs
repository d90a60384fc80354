use derive_more::Display;

use crate::Coeff;
use super::Poly;

/// Largest exponent a term may carry, so that degrees fit in `isize`.
pub const MAX_EXP: usize = isize::MAX as usize;

// `coeff * x^exp`, where `coeff` is a polynomial in the next variable.

#[derive(Clone, PartialEq, Eq, Hash, Debug, Display)]
#[display("({coeff},{exp})")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term<R = i64>
where R: Coeff {
    pub(crate) exp: usize,
    pub(crate) coeff: Poly<R>
}

impl<R> Term<R>
where R: Coeff {
    pub fn new(exp: usize, coeff: Poly<R>) -> Self {
        assert!(exp <= MAX_EXP, "exponent {exp} exceeds {MAX_EXP}");
        Self { exp, coeff }
    }

    pub fn exp(&self) -> usize {
        self.exp
    }

    pub fn coeff(&self) -> &Poly<R> {
        &self.coeff
    }

    pub fn into_parts(self) -> (usize, Poly<R>) {
        (self.exp, self.coeff)
    }
}

impl<R> From<(usize, Poly<R>)> for Term<R>
where R: Coeff {
    fn from((exp, coeff): (usize, Poly<R>)) -> Self {
        Self::new(exp, coeff)
    }
}
