use std::iter;
use itertools::{EitherOrBoth, Itertools};

use crate::Coeff;
use super::{Poly, Term};

pub(super) fn add<R>(p: &Poly<R>, q: &Poly<R>) -> Poly<R>
where R: Coeff {
    match (p.as_const(), q.as_const()) {
        (Some(&a), Some(&b)) => Poly::from_const(a.add_w(b)),
        (Some(&a), None) => add_const(a, q),
        (None, Some(&b)) => add_const(b, p),
        (None, None) => merge(p, q)
    }
}

pub(super) fn sub<R>(p: &Poly<R>, q: &Poly<R>) -> Poly<R>
where R: Coeff {
    add(p, &neg(q))
}

pub(super) fn neg<R>(p: &Poly<R>) -> Poly<R>
where R: Coeff {
    p.scale(R::one().neg_w())
}

// c + q, where q is not a constant.
// c joins q at x^0, the remaining terms are copied as they are.
fn add_const<R>(c: R, q: &Poly<R>) -> Poly<R>
where R: Coeff {
    let mut rest = q.iter().peekable();
    let head = match rest.next_if(|t| t.exp == 0) {
        Some(t) => add(&Poly::from_const(c), &t.coeff),
        None => Poly::from_const(c)
    };

    let terms = iter::once(Term::new(0, head))
        .chain(rest.cloned())
        .collect();

    Poly::from_raw_terms(terms)
}

// both p, q are sums, sorted by exponent.
fn merge<R>(p: &Poly<R>, q: &Poly<R>) -> Poly<R>
where R: Coeff {
    let terms = p.iter()
        .merge_join_by(q.iter(), |s, t| s.exp.cmp(&t.exp))
        .map(|e| match e {
            EitherOrBoth::Both(s, t) => Term::new(s.exp, add(&s.coeff, &t.coeff)),
            EitherOrBoth::Left(s) |
            EitherOrBoth::Right(s) => s.clone()
        })
        .collect();

    Poly::from_raw_terms(terms)
}
