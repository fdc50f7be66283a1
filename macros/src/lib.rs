//! Procedural macros for the tola-target compatibility layer
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `target_if!{}` | expression | Per-target body selection |
//! | `#[target_cfg]` | item | Keep an item only where a gate holds |
//! | `gate!()` | expression | Gate expression as a `bool` constant |
//!
//! ## Gate expressions
//!
//! ```ignore
//! is_host | is_device | provides_sm_53 | is_exactly_sm_80 | any_target | no_target
//! // combined with `&`, `|`, `!` and parentheses
//! ```
//!
//! ## Example
//!
//! ```ignore
//! let y = target_if! {
//!     provides_sm_53 => { native::hsin(x) },
//!     else => { fallback::sin(x) },
//! };
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate `InvokeOnce`/`InvokeMut`/`Invoke` for plain callables.
///
/// # Usage
/// ```ignore
/// impl_callable_arities!(8);  // arities 0..=8
/// ```
#[doc(hidden)]
#[proc_macro]
pub fn impl_callable_arities(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::arity::ArityInput);
    inner::arity::expand_callable_impls(input).into()
}

/// Generate the invocation impls of `BindFront` for every bound/trailing split.
#[doc(hidden)]
#[proc_macro]
pub fn impl_bind_front_arities(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::arity::ArityInput);
    inner::arity::expand_bind_front_impls(input).into()
}

/// Generate `BoundArgs` and `PanicFree` for tuples.
#[doc(hidden)]
#[proc_macro]
pub fn impl_tuple_arities(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::arity::ArityInput);
    inner::arity::expand_tuple_impls(input).into()
}

/// Generate `PanicFree` for primitive types.
#[doc(hidden)]
#[proc_macro]
pub fn impl_primitive_facts(_input: TokenStream) -> TokenStream {
    inner::primitives::expand_primitive_facts().into()
}

/// Newest hardware revision the current target provides, as `Option<u32>`.
#[doc(hidden)]
#[proc_macro]
pub fn current_sm(_input: TokenStream) -> TokenStream {
    user::target_if::expand_current_sm().into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Select one of two bodies per compilation target.
///
/// Only the body whose gate matches the target is compiled; the other one is
/// removed before name resolution.
///
/// ```ignore
/// let v = target_if! {
///     is_device => { device_path() },
///     else => { host_path() },
/// };
///
/// target_if! { provides_sm_70 => { warm_up_tensor_cores(); } }
/// ```
#[proc_macro]
pub fn target_if(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::target_if::TargetIfInput);
    user::target_if::expand_target_if(input).into()
}

/// Keep the annotated item only on targets where the gate holds.
///
/// ```ignore
/// #[target_cfg(provides_sm_53)]
/// mod native {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn target_cfg(attr: TokenStream, item: TokenStream) -> TokenStream {
    match user::target_if::expand_target_cfg(attr.into(), item.into()) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Evaluate a gate expression as a `bool` constant.
///
/// ```ignore
/// const NATIVE_HALF: bool = gate!(provides_sm_53);
/// ```
#[proc_macro]
pub fn gate(input: TokenStream) -> TokenStream {
    match user::target_if::expand_gate(input.into()) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
