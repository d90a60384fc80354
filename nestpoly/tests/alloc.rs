use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use num_traits::{Pow, Zero};
use nestpoly::{Poly, PolyStack, Term, TermBuf};

// Counts live heap blocks per thread, so that tests running in parallel
// do not see each other's allocations.
struct Counting;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn bump(d: isize) {
    let _ = LIVE.try_with(|c| c.set(c.get() + d));
}

fn live() -> isize {
    LIVE.with(|c| c.get())
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let p = System.alloc(layout);
        if !p.is_null() {
            bump(1);
        }
        p
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        bump(-1);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

type P = Poly<i64>;

fn build() -> P {
    // (x_0 + x_1 + x_2 + 1)^3
    let x = P::variable;
    let s = x(0) + x(1) + x(2) + P::from_const(1);
    (&s).pow(3)
}

#[test]
fn const_does_not_allocate() {
    let base = live();
    let p = P::from_const(5);
    let q = &p * &p + P::zero();
    assert_eq!(live(), base);
    assert_eq!(q, P::from_const(25));
}

#[test]
fn clone_and_drop() {
    let base = live();
    let p = build();
    let n = live() - base;
    assert!(n > 0);

    let q = p.clone();
    assert_eq!(live() - base, 2 * n);
    assert_eq!(p, q);

    drop(q);
    assert_eq!(live() - base, n);
    assert_eq!(p, build());

    drop(p);
    assert_eq!(live(), base);
}

#[test]
fn arith_does_not_leak() {
    let base = live();
    {
        let p = build();
        let q = P::variable(1);
        for _ in 0..10 {
            let r = &(&p * &q) - &p;
            let s = r.eval(3);
            assert!(s.is_canonical());
            assert!((&r - &r).is_zero());
        }
    }
    assert_eq!(live(), base);
}

#[test]
fn in_place_ops_do_not_leak() {
    let base = live();
    {
        let mut p = build();
        p.insert_term(P::variable(2), 4);
        p.scale_by(-3);
        p += P::variable(0);
        p *= &P::variable(1);
        let q = p.clone();
        p -= &q;
        assert!(p.is_zero());
    }
    assert_eq!(live(), base);
}

#[test]
fn containers_release_entries() {
    let base = live();
    {
        let mut s = PolyStack::new();
        s.extend((0..8).map(P::variable));
        s.pop();

        let mut b = TermBuf::<i64>::new();
        b.extend((0..120).map(|i| Term::new(i % 7, P::variable(i % 3))));
        s.push(b.into_poly());
        // remaining entries are dropped with the stack
    }
    assert_eq!(live(), base);
}
