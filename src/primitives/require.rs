//! Turning type-level facts into trait obligations.
//!
//! A bound `X: Require<Fact>` only holds when `Fact` is `Present`, and a
//! failing bound is reported at the call site with the name of the fact.

use super::bool::Present;

// We include Subject and Fact to expose them in the diagnostic message.
#[diagnostic::on_unimplemented(
    message = "Compile-time requirement failed: {Fact}",
    label = "`{Subject}` does not satisfy '{Fact}'",
    note = "The fact resolved to `Absent` for this compilation target."
)]
pub trait IsTrue<Subject: ?Sized, Fact: ?Sized> {}

impl<S: ?Sized, F: ?Sized> IsTrue<S, F> for Present {}

/// Implemented for every `Subject` when the fact `F` is `Present`.
pub trait Require<F: Fact> {}

impl<S: ?Sized, F> Require<F> for S
where
    F: Fact,
    F::Out: IsTrue<S, F>,
{
}

/// A named type-level fact.
pub trait Fact {
    type Out: super::Bool;
}
