mod poly;
mod term;
mod add;
mod mul;
mod deg;
mod eval;
mod ops;

pub use poly::Poly;
pub use term::{Term, MAX_EXP};
