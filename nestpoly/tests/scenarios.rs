use num_traits::{One, Pow, Zero};
use nestpoly::{Poly, PolyStack, Term, TermBuf};

type P = Poly<i64>;

// installs the logger once per test binary.
fn init_logger() {
    use std::sync::Once;
    use nestpoly::util::log::init_logger_from_env;

    static INIT: Once = Once::new();
    INIT.call_once(|| init_logger_from_env().unwrap());
}

fn t(exp: usize, c: i64) -> Term<i64> {
    Term::new(exp, P::from_const(c))
}

#[test]
fn eval_3x2_plus_2() {
    init_logger();

    let p = P::add_many_terms(vec![t(2, 3), t(0, 2)]);
    assert_eq!(p.eval(5), P::from_const(77));
}

#[test]
fn mul_linear() {
    init_logger();

    let p = P::from_terms([t(1, 3), t(0, 1)]);
    let q = P::from_terms([t(1, 2), t(0, 5)]);
    let expected = P::add_many_terms(vec![t(2, 6), t(1, 17), t(0, 5)]);

    assert_eq!(&p * &q, expected);
    assert_eq!(&q * &p, expected);
}

#[test]
fn add_cancels_to_zero() {
    init_logger();

    let x = P::variable(0);
    let r = &x + &(-&x);

    assert!(r.is_zero());
    assert!(r.is_const());
    assert_eq!(r, P::zero());
    assert_eq!(r.deg(), -1);
}

#[test]
fn binomial() {
    init_logger();

    // (x_0 + x_1)^4, coefficients 1 4 6 4 1
    let x = P::variable;
    let p = (&(x(0) + x(1))).pow(4);
    let x1 = |e: usize, c: i64| P::mono(e, P::from_const(c));

    let expected = P::from_terms([
        Term::new(0, x1(4, 1)),
        Term::new(1, x1(3, 4)),
        Term::new(2, x1(2, 6)),
        Term::new(3, x1(1, 4)),
        t(4, 1),
    ]);

    assert_eq!(p, expected);
    assert_eq!(p.deg(), 4);
    assert_eq!(p.deg_for(0), 4);
    assert_eq!(p.deg_for(1), 4);
    assert_eq!(p.eval_many(&[1, 1]), P::from_const(16));
}

#[test]
fn three_vars() {
    init_logger();

    // (x_0 x_2 - x_1)(x_0 x_2 + x_1) = x_0^2 x_2^2 - x_1^2
    let x = P::variable;
    let a = &x(0) * &x(2);
    let p = (&a - &x(1)) * (&a + &x(1));
    let expected = &a * &a - &x(1) * &x(1);

    assert_eq!(p, expected);
    assert!(p.is_canonical());
    assert_eq!(p.deg(), 4);
    assert_eq!(p.deg_for(0), 2);
    assert_eq!(p.deg_for(1), 2);
    assert_eq!(p.deg_for(2), 2);

    // x_0 = 2 gives 4 x_1^2 - x_0^2 in the shifted variables
    let q = p.eval(2);
    assert_eq!(q, (&x(1) * &x(1)).scale(4) - &x(0) * &x(0));
}

#[test]
fn buffer_then_stack() {
    init_logger();

    let mut buf = TermBuf::<i64>::new();
    for e in 0..100 {
        buf.push(t(e % 10, 1));
    }
    let p = buf.into_poly();
    assert_eq!(p.nterms(), 10);
    assert!(p.iter().all(|t| t.coeff() == &P::from_const(10)));

    let mut stack = PolyStack::new();
    stack.push(p);
    stack.push(P::one());
    let (b, a) = (stack.pop(), stack.pop());
    stack.push(a - b);

    assert_eq!(stack.peek().eval(1), P::from_const(99));
}

#[test]
fn narrow_coeffs_wrap() {
    init_logger();

    // over i8: (16x + 1)^2 = 256x^2 + 32x + 1 = 32x + 1
    let p = Poly::<i8>::from_terms([
        Term::new(1, Poly::from_const(16)),
        Term::new(0, Poly::from_const(1)),
    ]);
    let q = &p * &p;
    assert_eq!(q, Poly::from_terms([
        Term::new(1, Poly::from_const(32)),
        Term::new(0, Poly::from_const(1)),
    ]));
    assert_eq!(q.deg(), 1);
    assert!(q.is_canonical());
}
