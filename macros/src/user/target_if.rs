//! `target_if!`, `#[target_cfg]` and `gate!` implementation.
//!
//! All three lower a gate expression to a `cfg` predicate. The rejected body
//! is removed by `cfg` before name resolution, so it may mention symbols that
//! only exist on the other target.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    Block, Token,
};

use crate::common::{gate_expr_to_cfg, gate_expr_to_string, GateExpr};

/// `<gate-expr> => { .. } [, else => { .. }] [,]`
pub struct TargetIfInput {
    pub gate: GateExpr,
    pub fast: Block,
    pub portable: Option<Block>,
}

impl Parse for TargetIfInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let gate: GateExpr = input.parse()?;
        input.parse::<Token![=>]>()?;
        let fast: Block = input.parse()?;

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        let portable = if input.peek(Token![else]) {
            input.parse::<Token![else]>()?;
            input.parse::<Token![=>]>()?;
            let block: Block = input.parse()?;
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
            Some(block)
        } else {
            None
        };

        if !input.is_empty() {
            return Err(input.error(format!(
                "unexpected tokens after the arms of `target_if!` (gate `{}`); \
                 only one gated arm and one `else` arm are accepted",
                gate_expr_to_string(&gate)
            )));
        }

        Ok(TargetIfInput { gate, fast, portable })
    }
}

pub fn expand_target_if(input: TargetIfInput) -> TokenStream {
    let pred = gate_expr_to_cfg(&input.gate);
    let fast = &input.fast;
    let value = format_ident!("__tola_target_selected");

    match &input.portable {
        Some(portable) => quote! {
            {
                #[cfg(#pred)]
                let #value = #fast;
                #[cfg(not(#pred))]
                let #value = #portable;
                #value
            }
        },
        None => quote! {
            {
                #[cfg(#pred)]
                let () = #fast;
            }
        },
    }
}

/// Attribute form: `#[target_cfg(provides_sm_53)] mod native;`
pub fn expand_target_cfg(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let gate: GateExpr = syn::parse2(attr)?;
    let pred = gate_expr_to_cfg(&gate);
    Ok(quote! {
        #[cfg(#pred)]
        #item
    })
}

/// `gate!(expr)` evaluates the predicate as a `bool` constant.
pub fn expand_gate(input: TokenStream) -> syn::Result<TokenStream> {
    let gate: GateExpr = syn::parse2(input)?;
    let pred = gate_expr_to_cfg(&gate);
    Ok(quote! { ::core::cfg!(#pred) })
}

/// `current_sm!()` yields the newest revision the target provides, if any.
pub fn expand_current_sm() -> TokenStream {
    let mut chain = quote! { ::core::option::Option::None };
    for &revision in crate::common::KNOWN_REVISIONS {
        let feature = syn::LitStr::new(&format!("sm_{revision}"), proc_macro2::Span::call_site());
        chain = quote! {
            if ::core::cfg!(all(target_arch = "nvptx64", target_feature = #feature)) {
                ::core::option::Option::Some(#revision)
            } else {
                #chain
            }
        };
    }
    chain
}
