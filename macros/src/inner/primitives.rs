//! Primitive type table for generated fact impls.

use proc_macro2::TokenStream;
use quote::quote;

/// Types whose clone and move are plain bit copies.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "bool",
    "char",

    // Unsigned integers
    "u8",
    "u16",
    "u32",
    "u64",
    "u128",
    "usize",

    // Signed integers
    "i8",
    "i16",
    "i32",
    "i64",
    "i128",
    "isize",

    // Floats
    "f32",
    "f64",

    // NonZero
    "core::num::NonZeroU8",
    "core::num::NonZeroU16",
    "core::num::NonZeroU32",
    "core::num::NonZeroU64",
    "core::num::NonZeroUsize",
    "core::num::NonZeroI8",
    "core::num::NonZeroI16",
    "core::num::NonZeroI32",
    "core::num::NonZeroI64",
    "core::num::NonZeroIsize",
];

/// `impl PanicFree for <primitive> { type Fact = Present; }` for each entry.
pub fn expand_primitive_facts() -> TokenStream {
    let impls = PRIMITIVE_TYPES.iter().map(|name| {
        let ty: syn::Type = syn::parse_str(name).expect("primitive type table entry parses");
        quote! {
            impl PanicFree for #ty {
                type Fact = Present;
            }
        }
    });
    quote! { #(#impls)* }
}
