mod poly;
mod stack;
mod term_buf;

pub use poly::*;
pub use stack::*;
pub use term_buf::*;
