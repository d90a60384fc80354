use delegate::delegate;

use crate::{Coeff, Poly};

/// LIFO stack of polynomials, holding intermediate results of an
/// expression evaluator. Remaining entries are dropped with the stack.
#[derive(Clone, Debug, Default)]
pub struct PolyStack<R = i64>
where R: Coeff {
    items: Vec<Poly<R>>
}

impl<R> PolyStack<R>
where R: Coeff {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    delegate! {
        to self.items {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn clear(&mut self);
        }
    }

    pub fn push(&mut self, p: Poly<R>) {
        self.items.push(p)
    }

    pub fn pop(&mut self) -> Poly<R> {
        let Some(p) = self.items.pop() else {
            panic!("pop from an empty stack")
        };
        p
    }

    pub fn peek(&self) -> &Poly<R> {
        let Some(p) = self.items.last() else {
            panic!("peek into an empty stack")
        };
        p
    }
}

impl<R> Extend<Poly<R>> for PolyStack<R>
where R: Coeff {
    fn extend<T: IntoIterator<Item = Poly<R>>>(&mut self, iter: T) {
        self.items.extend(iter)
    }
}
