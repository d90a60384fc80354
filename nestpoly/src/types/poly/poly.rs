use std::fmt::{Debug, Display};
use itertools::Itertools;
use num_traits::{One, Zero};

use crate::Coeff;
use super::Term;

// A polynomial in x_0 whose coefficients are polynomials in x_1, x_2, ...
//
// Canonical form:
//  - terms of a `Sum` are strictly ascending in exponent,
//  - no term has a zero coefficient,
//  - a single term c x^0 with constant c is stored as `Const(c)`,
//  - zero is `Const(0)`, never an empty `Sum`.
//
// The representation is private, every constructor goes through `normalize`.

#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum Repr<R>
where R: Coeff {
    Const(R),
    Sum(Vec<Term<R>>)
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Poly<R = i64>
where R: Coeff {
    repr: Repr<R>
}

impl<R> Poly<R>
where R: Coeff {
    pub fn from_const(c: R) -> Self {
        Self { repr: Repr::Const(c) }
    }

    /// `coeff * x_0^exp`.
    pub fn mono(exp: usize, coeff: Self) -> Self {
        Self::from_raw_terms(vec![Term::new(exp, coeff)])
    }

    /// The variable `x_i`, i.e. `x_0^0 (x_1^0 ( ... x_i^1))`.
    pub fn variable(i: usize) -> Self {
        (0..i).fold(Self::mono(1, Self::one()), |p, _| Self::mono(0, p))
    }

    /// Sums arbitrary (unsorted, possibly repeated) terms.
    pub fn from_terms<I>(terms: I) -> Self
    where I: IntoIterator<Item = Term<R>> {
        Self::add_many_terms(terms.into_iter().collect())
    }

    // `terms` must be strictly ascending in exponent,
    // and each coefficient must be canonical.
    pub(crate) fn from_raw_terms(terms: Vec<Term<R>>) -> Self {
        let mut p = Self { repr: Repr::Sum(terms) };
        p.normalize();
        p
    }

    fn normalize(&mut self) {
        let Repr::Sum(terms) = &mut self.repr else {
            return
        };

        debug_assert!(
            terms.iter().tuple_windows().all(|(s, t)| s.exp < t.exp),
            "terms must be strictly ascending"
        );

        terms.retain(|t| !t.coeff.is_zero());

        let collapsed = match terms.as_slice() {
            [] => Some(R::zero()),
            [t] if t.exp == 0 => t.coeff.as_const().copied(),
            _ => None
        };

        if let Some(c) = collapsed {
            self.repr = Repr::Const(c);
        }
    }

    pub fn is_canonical(&self) -> bool {
        let Repr::Sum(terms) = &self.repr else {
            return true
        };

        let collapsible = matches!(
            terms.as_slice(),
            [t] if t.exp == 0 && t.coeff.is_const()
        );

        !terms.is_empty() &&
        !collapsible &&
        terms.iter().tuple_windows().all(|(s, t)| s.exp < t.exp) &&
        terms.iter().all(|t| !t.coeff.is_zero() && t.coeff.is_canonical())
    }

    pub fn is_const(&self) -> bool {
        matches!(self.repr, Repr::Const(_))
    }

    pub fn as_const(&self) -> Option<&R> {
        match &self.repr {
            Repr::Const(c) => Some(c),
            Repr::Sum(_) => None
        }
    }

    /// Terms in ascending order of exponent. Empty for a constant.
    pub fn terms(&self) -> &[Term<R>] {
        match &self.repr {
            Repr::Const(_) => &[],
            Repr::Sum(terms) => terms
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term<R>> {
        self.terms().iter()
    }

    pub fn nterms(&self) -> usize {
        self.terms().len()
    }

    /// `c * self`. Coefficients that wrap around to zero are dropped.
    pub fn scale(&self, c: R) -> Self {
        if c.is_zero() {
            return Self::zero()
        }
        match &self.repr {
            Repr::Const(a) => Self::from_const(a.mul_w(c)),
            Repr::Sum(terms) => Self::from_raw_terms(
                terms.iter().map(|t|
                    Term::new(t.exp, t.coeff.scale(c))
                ).collect()
            )
        }
    }

    /// In-place version of `scale`.
    pub fn scale_by(&mut self, c: R) {
        if c.is_zero() {
            *self = Self::zero();
            return
        }
        match &mut self.repr {
            Repr::Const(a) => *a = a.mul_w(c),
            Repr::Sum(terms) => terms.iter_mut().for_each(|t|
                t.coeff.scale_by(c)
            )
        }
        self.normalize();
    }

    /// Adds `coeff * x_0^exp` to `self`, taking ownership of `coeff`.
    pub fn insert_term(&mut self, coeff: Self, exp: usize) {
        if coeff.is_zero() {
            return
        }

        let terms = self.sum_terms_mut();
        match terms.binary_search_by_key(&exp, |t| t.exp) {
            Ok(i) => {
                let prev = std::mem::take(&mut terms[i].coeff);
                terms[i].coeff = prev + coeff;
            },
            Err(i) => terms.insert(i, Term::new(exp, coeff))
        }

        self.normalize();
    }

    // views a constant c as the sum c x^0 (or the empty sum if c = 0).
    fn sum_terms_mut(&mut self) -> &mut Vec<Term<R>> {
        if let Repr::Const(c) = self.repr {
            let terms = if c.is_zero() {
                vec![]
            } else {
                vec![Term::new(0, Self::from_const(c))]
            };
            self.repr = Repr::Sum(terms);
        }
        match &mut self.repr {
            Repr::Sum(terms) => terms,
            Repr::Const(_) => unreachable!()
        }
    }
}

impl<R> From<R> for Poly<R>
where R: Coeff {
    fn from(c: R) -> Self {
        Self::from_const(c)
    }
}

impl<R> FromIterator<Term<R>> for Poly<R>
where R: Coeff {
    fn from_iter<T: IntoIterator<Item = Term<R>>>(iter: T) -> Self {
        Self::from_terms(iter)
    }
}

impl<R> Default for Poly<R>
where R: Coeff {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R> Zero for Poly<R>
where R: Coeff {
    fn zero() -> Self {
        Self::from_const(R::zero())
    }

    fn is_zero(&self) -> bool {
        matches!(self.repr, Repr::Const(c) if c.is_zero())
    }
}

impl<R> One for Poly<R>
where R: Coeff {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        matches!(self.repr, Repr::Const(c) if c.is_one())
    }
}

// Prints in the calculator's term syntax: (c,e)+(c,e)+...
impl<R> Display for Poly<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.repr {
            Repr::Const(c) => write!(f, "{c}"),
            Repr::Sum(terms) => write!(f, "{}", terms.iter().join("+"))
        }
    }
}

impl<R> Debug for Poly<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        impl<R> serde::Serialize for Poly<R>
        where R: Coeff + serde::Serialize {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where S: serde::Serializer {
                self.repr.serialize(serializer)
            }
        }

        // input is re-normalized, so a deserialized value is always canonical.
        impl<'de, R> serde::Deserialize<'de> for Poly<R>
        where R: Coeff + serde::Deserialize<'de> {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where D: serde::Deserializer<'de> {
                let p = match Repr::<R>::deserialize(deserializer)? {
                    Repr::Const(c) => Self::from_const(c),
                    Repr::Sum(terms) => {
                        if let Some(t) = terms.iter().find(|t| t.exp > crate::MAX_EXP) {
                            return Err(serde::de::Error::custom(
                                format!("exponent {} out of range", t.exp)
                            ))
                        }
                        Self::add_many_terms(terms)
                    }
                };
                Ok(p)
            }
        }
    }
}
