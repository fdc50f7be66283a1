//! Internal generators used by the library crate itself.

pub mod arity;
pub mod primitives;
