//! # Layer 0: Primitives
//!
//! Basic building blocks shared by every layer:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `require.rs`: Facts and the `Require` obligation.

pub mod bool;
pub mod require;

// Re-export key types at this level
pub use bool::{Absent, Bool, Flag, If, Present, SelectBool};
pub use require::{Fact, IsTrue, Require};
