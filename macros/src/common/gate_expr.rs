// Gate expression parsing and lowering to `cfg` predicates

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token,
};

use super::revisions::{KNOWN_REVISIONS, known_revisions_list};

// =============================================================================
// Gate Expression AST
// =============================================================================

/// A single hardware/domain predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    IsHost,
    IsDevice,
    /// Target revision is at least `sm_N`.
    ProvidesSm(u32),
    /// Target revision is exactly `sm_N`.
    IsExactlySm(u32),
    AnyTarget,
    NoTarget,
}

#[derive(Clone, Debug)]
pub enum GateExpr {
    Gate(Gate),
    And(Box<GateExpr>, Box<GateExpr>),
    Or(Box<GateExpr>, Box<GateExpr>),
    Not(Box<GateExpr>),
}

impl Parse for GateExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<GateExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) && !input.peek(Token![||]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = GateExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<GateExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) && !input.peek(Token![&&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = GateExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<GateExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(GateExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<GateExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        let ident: Ident = input.parse()?;
        parse_gate(&ident).map(GateExpr::Gate)
    }
}

fn parse_gate(ident: &Ident) -> syn::Result<Gate> {
    let name = ident.to_string();
    match name.as_str() {
        "is_host" => return Ok(Gate::IsHost),
        "is_device" => return Ok(Gate::IsDevice),
        "any_target" => return Ok(Gate::AnyTarget),
        "no_target" => return Ok(Gate::NoTarget),
        _ => {}
    }

    let (rest, exact) = if let Some(rest) = name.strip_prefix("provides_sm_") {
        (rest, false)
    } else if let Some(rest) = name.strip_prefix("is_exactly_sm_") {
        (rest, true)
    } else {
        return Err(syn::Error::new(
            ident.span(),
            format!(
                "unknown target gate `{name}`; expected one of `is_host`, `is_device`, \
                 `any_target`, `no_target`, `provides_sm_N`, `is_exactly_sm_N`"
            ),
        ));
    };

    let revision: u32 = rest.parse().map_err(|_| {
        syn::Error::new(ident.span(), format!("`{name}` does not end in a revision number"))
    })?;

    if !KNOWN_REVISIONS.contains(&revision) {
        return Err(syn::Error::new(
            ident.span(),
            format!(
                "unknown hardware revision sm_{revision}; known revisions: {}",
                known_revisions_list()
            ),
        ));
    }

    Ok(if exact { Gate::IsExactlySm(revision) } else { Gate::ProvidesSm(revision) })
}

// =============================================================================
// Lowering
// =============================================================================

/// The predicate that marks a device compilation pass.
pub fn device_predicate() -> TokenStream {
    quote! { any(target_arch = "nvptx64", target_arch = "amdgpu", tola_device) }
}

fn sm_feature(revision: u32) -> TokenStream {
    let name = syn::LitStr::new(&format!("sm_{revision}"), Span::call_site());
    quote! { target_feature = #name }
}

/// `sm_N` or any newer known revision.
pub fn provides_predicate(revision: u32) -> TokenStream {
    let features = KNOWN_REVISIONS
        .iter()
        .filter(|&&r| r >= revision)
        .map(|&r| sm_feature(r));
    quote! { all(target_arch = "nvptx64", any(#(#features),*)) }
}

fn exactly_predicate(revision: u32) -> TokenStream {
    let this = sm_feature(revision);
    let newer: Vec<_> = KNOWN_REVISIONS
        .iter()
        .filter(|&&r| r > revision)
        .map(|&r| sm_feature(r))
        .collect();
    quote! { all(target_arch = "nvptx64", #this, not(any(#(#newer),*))) }
}

/// Lower a gate expression to the body of a `cfg(...)` attribute.
pub fn gate_expr_to_cfg(expr: &GateExpr) -> TokenStream {
    match expr {
        GateExpr::Gate(gate) => match gate {
            Gate::IsHost => {
                let device = device_predicate();
                quote! { not(#device) }
            }
            Gate::IsDevice => device_predicate(),
            Gate::ProvidesSm(r) => provides_predicate(*r),
            Gate::IsExactlySm(r) => exactly_predicate(*r),
            Gate::AnyTarget => quote! { all() },
            Gate::NoTarget => quote! { any() },
        },
        GateExpr::And(lhs, rhs) => {
            let l = gate_expr_to_cfg(lhs);
            let r = gate_expr_to_cfg(rhs);
            quote! { all(#l, #r) }
        }
        GateExpr::Or(lhs, rhs) => {
            let l = gate_expr_to_cfg(lhs);
            let r = gate_expr_to_cfg(rhs);
            quote! { any(#l, #r) }
        }
        GateExpr::Not(operand) => {
            let o = gate_expr_to_cfg(operand);
            quote! { not(#o) }
        }
    }
}

/// Human-readable rendering, used in diagnostics.
pub fn gate_expr_to_string(expr: &GateExpr) -> String {
    match expr {
        GateExpr::Gate(gate) => match gate {
            Gate::IsHost => "is_host".into(),
            Gate::IsDevice => "is_device".into(),
            Gate::ProvidesSm(r) => format!("provides_sm_{r}"),
            Gate::IsExactlySm(r) => format!("is_exactly_sm_{r}"),
            Gate::AnyTarget => "any_target".into(),
            Gate::NoTarget => "no_target".into(),
        },
        GateExpr::And(lhs, rhs) => {
            format!("({} & {})", gate_expr_to_string(lhs), gate_expr_to_string(rhs))
        }
        GateExpr::Or(lhs, rhs) => {
            format!("({} | {})", gate_expr_to_string(lhs), gate_expr_to_string(rhs))
        }
        GateExpr::Not(operand) => format!("!{}", gate_expr_to_string(operand)),
    }
}
