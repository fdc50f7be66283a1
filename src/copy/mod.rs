//! # Layer 4: Capability-Gated Copy
//!
//! Copies a cursor range into an output cursor. Each element is assigned the
//! way the two reference types allow, decided per type pair at compile time:
//!
//! - **direct**: the output accepts the input's reference as is;
//! - **through a value**: the input reference is first converted to the
//!   input's value type, and that temporary is stored.
//!
//! The choice is the witness `<O::Reference as AssignableFrom<I::Reference>>::Fact`.
//! Outputs that do not name a reference type use [`Untyped`], which accepts
//! every source directly.
//!
//! ```
//! use tola_target::copy::{general_copy, BitCursor, SliceCursor, SliceOutput};
//!
//! let src = [3u32, 1, 4];
//! let mut dst = [0u32; 3];
//! let (mut first, last) = SliceCursor::range(&src);
//! let out = general_copy(&mut first, &last, SliceOutput::new(&mut dst));
//! assert_eq!(out.position(), 3);
//! assert_eq!(dst, src);
//!
//! // Proxy references go through a `bool` temporary
//! let bits = [0b0000_0101u8];
//! let mut flags = [false; 3];
//! let (mut first, last) = BitCursor::range(&bits, 3);
//! general_copy(&mut first, &last, SliceOutput::new(&mut flags));
//! assert_eq!(flags, [true, false, true]);
//! ```

mod cursors;

pub use cursors::{BitCursor, BitRef, PushBack, SliceCursor, SliceOutput, Slot};

use crate::primitives::{Absent, Bool, Present};

/// A readable position in a sequence.
///
/// Two cursors compare equal when they denote the same position.
pub trait Cursor: PartialEq {
    type Value;
    /// What reading the position yields. May be a proxy.
    type Reference;

    fn get(&self) -> Self::Reference;
    fn advance(&mut self);
}

/// A writable position in a sequence.
pub trait OutputCursor {
    /// The reference type of a slot, or [`Untyped`] when unspecified.
    type Reference;

    fn advance(&mut self);
}

/// Output cursors that can take a `V` at the current position.
pub trait Store<V>: OutputCursor {
    fn store(&mut self, value: V);
}

/// Whether a `Src` can be assigned onto `Self` directly.
#[diagnostic::on_unimplemented(
    message = "no assignability rule between `{Self}` and `{Src}`",
    note = "implement `AssignableFrom<{Src}>` for the output's reference type"
)]
pub trait AssignableFrom<Src> {
    type Fact: Bool;
}

/// Reference type of a write-only output whose slots are not typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Untyped;

impl<Src> AssignableFrom<Src> for Untyped {
    type Fact = Present;
}

/// One way of assigning an element, selected by the assignability fact.
pub trait AssignWith<I: Cursor, O> {
    fn assign(out: &mut O, input: &I);
}

impl<I, O> AssignWith<I, O> for Present
where
    I: Cursor,
    O: Store<I::Reference>,
{
    #[inline]
    fn assign(out: &mut O, input: &I) {
        out.store(input.get());
    }
}

impl<I, O> AssignWith<I, O> for Absent
where
    I: Cursor,
    I::Value: From<I::Reference>,
    O: Store<I::Value>,
{
    #[inline]
    fn assign(out: &mut O, input: &I) {
        out.store(I::Value::from(input.get()));
    }
}

/// Output cursors that can receive the elements of `I`.
pub trait CopyFrom<I: Cursor>: OutputCursor {
    fn assign_from(&mut self, input: &I);
}

impl<I, O> CopyFrom<I> for O
where
    I: Cursor,
    O: OutputCursor,
    O::Reference: AssignableFrom<I::Reference>,
    <O::Reference as AssignableFrom<I::Reference>>::Fact: AssignWith<I, O>,
{
    #[inline]
    fn assign_from(&mut self, input: &I) {
        <<O::Reference as AssignableFrom<I::Reference>>::Fact as AssignWith<I, O>>::assign(self, input);
    }
}

/// Assign the element under `input` to the slot under `out`.
#[inline]
pub fn iter_assign<I: Cursor, O: CopyFrom<I>>(out: &mut O, input: &I) {
    out.assign_from(input);
}

/// Copy `[first, last)` into `result`.
///
/// `first` ends up equal to `last`; the returned cursor is `result` advanced
/// once per element.
pub fn general_copy<I, O>(first: &mut I, last: &I, mut result: O) -> O
where
    I: Cursor,
    O: CopyFrom<I>,
{
    while *first != *last {
        iter_assign(&mut result, first);
        first.advance();
        result.advance();
    }
    result
}

/// Copy exactly `n` elements starting at `first` into `result`.
///
/// `first` ends up one past the last element read.
pub fn general_copy_n<I, O>(first: &mut I, n: usize, mut result: O) -> O
where
    I: Cursor,
    O: CopyFrom<I>,
{
    for _ in 0..n {
        iter_assign(&mut result, first);
        first.advance();
        result.advance();
    }
    result
}

/// Check whether an output cursor type can store a value type.
///
/// Works for concrete types only.
///
/// ```
/// use tola_target::copy::SliceOutput;
/// use tola_target::has_store;
///
/// assert!(has_store!(SliceOutput<'static, u8>, u8));
/// assert!(!has_store!(SliceOutput<'static, u8>, bool));
/// ```
#[macro_export]
macro_rules! has_store {
    ($Out:ty, $V:ty) => {{
        struct __Probe<O, V>(core::marker::PhantomData<(O, V)>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<O, V> __Fallback for __Probe<O, V> {}

        impl<O: $crate::copy::Store<V>, V> __Probe<O, V> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$Out, $V>::VAL
    }};
}
