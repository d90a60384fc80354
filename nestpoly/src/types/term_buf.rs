use delegate::delegate;
use log::debug;

use crate::{Coeff, Poly, Term};

pub const TERM_BUF_INIT_CAPACITY: usize = 50;

/// Append-only buffer of unsorted terms, summed up by `into_poly`.
/// The first push reserves `TERM_BUF_INIT_CAPACITY`, afterwards
/// the capacity doubles whenever it is exhausted.
#[derive(Clone, Debug, Default)]
pub struct TermBuf<R = i64>
where R: Coeff {
    terms: Vec<Term<R>>
}

impl<R> TermBuf<R>
where R: Coeff {
    pub fn new() -> Self {
        Self { terms: vec![] }
    }

    delegate! {
        to self.terms {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn capacity(&self) -> usize;
            pub fn iter(&self) -> std::slice::Iter<'_, Term<R>>;
        }
    }

    pub fn push(&mut self, t: Term<R>) {
        let (len, cap) = (self.terms.len(), self.terms.capacity());
        if cap == 0 {
            self.terms.reserve_exact(TERM_BUF_INIT_CAPACITY);
        } else if len == cap {
            self.terms.reserve_exact(cap);
        }
        self.terms.push(t)
    }

    pub fn into_poly(self) -> Poly<R> {
        debug!("sum up {} buffered terms", self.terms.len());
        Poly::add_many_terms(self.terms)
    }
}

impl<R> Extend<Term<R>> for TermBuf<R>
where R: Coeff {
    fn extend<T: IntoIterator<Item = Term<R>>>(&mut self, iter: T) {
        iter.into_iter().for_each(|t| self.push(t))
    }
}

impl<R> From<TermBuf<R>> for Poly<R>
where R: Coeff {
    fn from(buf: TermBuf<R>) -> Self {
        buf.into_poly()
    }
}
