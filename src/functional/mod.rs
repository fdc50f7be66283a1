//! # Layer 5: Partial Application
//!
//! [`bind_front`] fixes the leading arguments of a callable and returns a
//! value that can be called with the rest:
//!
//! ```
//! use tola_target::functional::{apply, bind_front, Invoke};
//!
//! fn volume(w: u32, h: u32, d: u32) -> u32 {
//!     w * h * d
//! }
//!
//! let base = bind_front(volume, (2, 3));
//! assert_eq!(base.call((4,)), 24);
//! assert_eq!(base.call((5,)), 30);
//! assert_eq!(apply(base, (1,)), volume(2, 3, 1));
//! ```
//!
//! The bound values are owned by the result. Calling by value moves them
//! into the callable; calling by reference clones them, so repeated calls
//! need `Clone` bound values:
//!
//! ```compile_fail
//! use tola_target::functional::{bind_front, Invoke};
//!
//! struct Ticket;
//! let redeem = bind_front(|_: Ticket| (), (Ticket,));
//! redeem.call(());
//! ```
//!
//! [`not_fn`] wraps a callable so that its result is negated:
//!
//! ```
//! use tola_target::functional::{not_fn, Invoke};
//!
//! let is_odd = not_fn(|n: u32| n % 2 == 0);
//! assert!(is_odd.call((3,)));
//! assert!(!is_odd.call((4,)));
//! ```
//!
//! Callables and arguments of up to eight parameters in total are supported.

use core::ops::Not;

use crate::primitives::{Bool, Present};

/// Call by value.
pub trait InvokeOnce<Args> {
    type Output;

    fn call_once(self, args: Args) -> Self::Output;
}

/// Call through a mutable reference.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called repeatedly with `{Args}`",
    note = "repeated calls clone the bound arguments; use `call_once` to move them instead"
)]
pub trait InvokeMut<Args>: InvokeOnce<Args> {
    fn call_mut(&mut self, args: Args) -> Self::Output;
}

/// Call through a shared reference.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called through a shared reference with `{Args}`",
    note = "repeated calls clone the bound arguments; use `call_once` to move them instead"
)]
pub trait Invoke<Args>: InvokeMut<Args> {
    fn call(&self, args: Args) -> Self::Output;
}

macros::impl_callable_arities!(8);

/// Values that can be stored in a partial application.
///
/// The stored copy is constructed from the argument by value, which every
/// sized type supports.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be stored in a partial application",
    label = "must be a sized value"
)]
pub trait Bindable {}

impl<T> Bindable for T {}

/// A tuple of bound arguments.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a tuple of bindable arguments",
    note = "pass the bound arguments as a tuple of at most eight values, e.g. `(a, b)`"
)]
pub trait BoundArgs {
    const LEN: usize;
}

/// Witness of whether invoking, cloning or moving a value can panic.
pub trait PanicFree {
    type Fact: Bool;
}

macros::impl_tuple_arities!(8);
macros::impl_primitive_facts!();

impl<T: ?Sized> PanicFree for &T {
    type Fact = Present;
}

#[cfg(feature = "std")]
impl PanicFree for String {
    type Fact = crate::primitives::Absent;
}

#[cfg(feature = "std")]
impl<T> PanicFree for Vec<T> {
    type Fact = crate::primitives::Absent;
}

/// Asserts that invoking `F` never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nothrow<F>(pub F);

impl<F> PanicFree for Nothrow<F> {
    type Fact = Present;
}

impl<F: InvokeOnce<Args>, Args> InvokeOnce<Args> for Nothrow<F> {
    type Output = F::Output;

    #[inline(always)]
    fn call_once(self, args: Args) -> F::Output {
        self.0.call_once(args)
    }
}

impl<F: InvokeMut<Args>, Args> InvokeMut<Args> for Nothrow<F> {
    #[inline(always)]
    fn call_mut(&mut self, args: Args) -> F::Output {
        self.0.call_mut(args)
    }
}

impl<F: Invoke<Args>, Args> Invoke<Args> for Nothrow<F> {
    #[inline(always)]
    fn call(&self, args: Args) -> F::Output {
        self.0.call(args)
    }
}

/// A callable with its leading arguments fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindFront<F, B> {
    func: F,
    bound: B,
}

impl<F, B: BoundArgs> BindFront<F, B> {
    /// Number of bound arguments.
    pub const BOUND: usize = B::LEN;

    pub fn func(&self) -> &F {
        &self.func
    }

    pub fn bound(&self) -> &B {
        &self.bound
    }

    pub fn into_parts(self) -> (F, B) {
        (self.func, self.bound)
    }
}

impl<F: PanicFree, B: PanicFree> PanicFree for BindFront<F, B> {
    type Fact = <F::Fact as Bool>::And<B::Fact>;
}

impl<F: PanicFree, B: PanicFree> BindFront<F, B> {
    /// Whether a call can never panic.
    pub const NOTHROW: bool = <<Self as PanicFree>::Fact as Bool>::VALUE;
}

macros::impl_bind_front_arities!(8);

/// Fix the leading arguments of `func`.
pub fn bind_front<F: Bindable, B: BoundArgs>(func: F, bound: B) -> BindFront<F, B> {
    BindFront { func, bound }
}

/// A callable whose result is negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotFn<F> {
    func: F,
}

impl<F> NotFn<F> {
    pub fn func(&self) -> &F {
        &self.func
    }

    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F, Args> InvokeOnce<Args> for NotFn<F>
where
    F: InvokeOnce<Args>,
    F::Output: Not,
{
    type Output = <F::Output as Not>::Output;

    #[inline(always)]
    fn call_once(self, args: Args) -> <F::Output as Not>::Output {
        !self.func.call_once(args)
    }
}

impl<F, Args> InvokeMut<Args> for NotFn<F>
where
    F: InvokeMut<Args>,
    F::Output: Not,
{
    #[inline(always)]
    fn call_mut(&mut self, args: Args) -> <F::Output as Not>::Output {
        !self.func.call_mut(args)
    }
}

impl<F, Args> Invoke<Args> for NotFn<F>
where
    F: Invoke<Args>,
    F::Output: Not,
{
    #[inline(always)]
    fn call(&self, args: Args) -> <F::Output as Not>::Output {
        !self.func.call(args)
    }
}

impl<F: PanicFree> PanicFree for NotFn<F> {
    type Fact = F::Fact;
}

impl<F: PanicFree> NotFn<F> {
    /// Whether a call can never panic.
    pub const NOTHROW: bool = <F::Fact as Bool>::VALUE;
}

/// Negate the result of `func`.
pub fn not_fn<F: Bindable>(func: F) -> NotFn<F> {
    NotFn { func }
}

/// Invoke `func` with a tuple of arguments.
#[inline]
pub fn apply<F: InvokeOnce<Args>, Args>(func: F, args: Args) -> F::Output {
    func.call_once(args)
}

/// Whether values of `T` are known never to panic.
pub const fn panic_free<T: PanicFree>() -> bool {
    <T::Fact as Bool>::VALUE
}

/// [`bind_front`] with the bound arguments listed inline.
///
/// ```
/// use tola_target::bind_front;
/// use tola_target::functional::Invoke;
///
/// let greet = bind_front!(|a: &str, b: &str| format!("{a}, {b}"), "hello");
/// assert_eq!(greet.call(("world",)), "hello, world");
/// ```
#[macro_export]
macro_rules! bind_front {
    ($func:expr $(, $arg:expr)* $(,)?) => {
        $crate::functional::bind_front($func, ($($arg,)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(a: i32, b: i32, c: i32, d: i32) -> i32 {
        a * 1000 + b * 100 + c * 10 + d
    }

    #[test]
    fn test_split_points_agree_with_full_call() {
        let full = apply(digits, (1, 2, 3, 4));
        assert_eq!(full, 1234);
        assert_eq!(apply(bind_front(digits, ()), (1, 2, 3, 4)), full);
        assert_eq!(apply(bind_front(digits, (1,)), (2, 3, 4)), full);
        assert_eq!(apply(bind_front(digits, (1, 2)), (3, 4)), full);
        assert_eq!(apply(bind_front(digits, (1, 2, 3, 4)), ()), full);
    }

    #[test]
    fn test_mutating_callable() {
        let mut count = 0;
        {
            let mut bump = bind_front(
                |step: i32, times: i32| {
                    count += step * times;
                    count
                },
                (2,),
            );
            assert_eq!(bump.call_mut((3,)), 6);
            assert_eq!(bump.call_mut((1,)), 8);
        }
        assert_eq!(count, 8);
    }

    #[test]
    fn test_call_once_moves_bound_values() {
        struct Token(u8);
        let redeem = bind_front(|t: Token, extra: u8| t.0 + extra, (Token(4),));
        assert_eq!(redeem.call_once((1,)), 5);
    }

    #[test]
    fn test_nested_binding() {
        let outer = bind_front(bind_front(digits, (9,)), (8,));
        assert_eq!(outer.call((7, 6)), 9876);
        assert_eq!(BindFront::<fn(), (u8, u8)>::BOUND, 2);
    }

    #[test]
    fn test_not_fn_negates() {
        let mut seen = 0;
        let mut differs = not_fn(|a: i32, b: i32| {
            seen += 1;
            a == b
        });
        assert!(differs.call_mut((1, 2)));
        assert!(!differs.call_mut((3, 3)));
        drop(differs);
        assert_eq!(seen, 2);

        let masked = not_fn(|x: u8| x & 0x0f);
        assert_eq!(masked.call((0x05,)), 0xfa);
        assert_eq!(apply(not_fn(bind_front(digits, (1, 2))), (3, 4)), !1234);
    }

    #[test]
    fn test_panic_free_facts() {
        assert!(panic_free::<u32>());
        assert!(panic_free::<(u8, &str, f64)>());
        assert!(!panic_free::<(u8, String)>());
        assert!(panic_free::<Nothrow<fn(u8) -> u8>>());

        fn double(x: u8) -> u8 {
            x * 2
        }
        let guarded = bind_front(Nothrow(double as fn(u8) -> u8), ());
        assert!(BindFront::<Nothrow<fn(u8) -> u8>, ()>::NOTHROW);
        assert_eq!(guarded.call((4,)), 8);
        assert!(!BindFront::<Nothrow<fn(u8) -> u8>, (String,)>::NOTHROW);
        assert!(NotFn::<Nothrow<fn(u8) -> bool>>::NOTHROW);
        assert!(!panic_free::<NotFn<BindFront<Nothrow<fn(u8) -> bool>, (String,)>>>());
    }
}
