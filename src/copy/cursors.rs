//! Cursor implementations over slices, bit arrays and collections.

use core::marker::PhantomData;

use super::{AssignableFrom, Cursor, OutputCursor, Store};
use crate::primitives::{Absent, Present};

/// Read cursor over a slice.
#[derive(Debug, Clone, Copy)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(slice: &'a [T]) -> Self {
        SliceCursor { slice, pos: 0 }
    }

    /// Cursors to the first element and one past the last.
    pub fn range(slice: &'a [T]) -> (Self, Self) {
        (SliceCursor { slice, pos: 0 }, SliceCursor { slice, pos: slice.len() })
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Value = T;
    type Reference = &'a T;

    /// Panics past the end of the slice.
    fn get(&self) -> &'a T {
        &self.slice[self.pos]
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Reference type of a typed output slot.
pub struct Slot<T>(PhantomData<T>);

impl<'r, T> AssignableFrom<&'r T> for Slot<T> {
    type Fact = Present;
}

impl<'b> AssignableFrom<BitRef<'b>> for Slot<bool> {
    type Fact = Absent;
}

/// Write cursor over a mutable slice. Storing past the end panics.
#[derive(Debug)]
pub struct SliceOutput<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceOutput<'a, T> {
    pub fn new(slice: &'a mut [T]) -> Self {
        SliceOutput { slice, pos: 0 }
    }

    /// Number of slots passed so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> OutputCursor for SliceOutput<'_, T> {
    type Reference = Slot<T>;

    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<'r, T: Clone> Store<&'r T> for SliceOutput<'_, T> {
    fn store(&mut self, value: &'r T) {
        self.slice[self.pos].clone_from(value);
    }
}

impl<T> Store<T> for SliceOutput<'_, T> {
    fn store(&mut self, value: T) {
        self.slice[self.pos] = value;
    }
}

/// Write-only cursor appending to a collection. Its slots are [`Untyped`](super::Untyped).
#[derive(Debug)]
pub struct PushBack<'c, C> {
    target: &'c mut C,
    written: usize,
}

impl<'c, C> PushBack<'c, C> {
    pub fn new(target: &'c mut C) -> Self {
        PushBack { target, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl<C> OutputCursor for PushBack<'_, C> {
    type Reference = super::Untyped;

    fn advance(&mut self) {
        self.written += 1;
    }
}

impl<C: Extend<V>, V> Store<V> for PushBack<'_, C> {
    fn store(&mut self, value: V) {
        self.target.extend(core::iter::once(value));
    }
}

/// Read cursor over packed bits, least significant bit first.
#[derive(Debug, Clone, Copy)]
pub struct BitCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BitCursor { bytes, pos: 0 }
    }

    /// Cursors to bit 0 and to bit `len`.
    pub fn range(bytes: &'a [u8], len: usize) -> (Self, Self) {
        (BitCursor { bytes, pos: 0 }, BitCursor { bytes, pos: len })
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

impl PartialEq for BitCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.bytes, other.bytes) && self.pos == other.pos
    }
}

impl<'a> Cursor for BitCursor<'a> {
    type Value = bool;
    type Reference = BitRef<'a>;

    fn get(&self) -> BitRef<'a> {
        BitRef { byte: &self.bytes[self.pos / 8], mask: 1 << (self.pos % 8) }
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Proxy reference to one bit.
#[derive(Debug, Clone, Copy)]
pub struct BitRef<'a> {
    byte: &'a u8,
    mask: u8,
}

impl BitRef<'_> {
    pub fn get(self) -> bool {
        *self.byte & self.mask != 0
    }
}

impl From<BitRef<'_>> for bool {
    fn from(bit: BitRef<'_>) -> bool {
        bit.get()
    }
}
