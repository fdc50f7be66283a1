//! Arity impl generators for the partial application layer.
//!
//! Stable Rust has no variadic generics, so every (bound, trailing) arity
//! pair gets its own impl. All of them are produced here from one template.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

pub struct ArityInput {
    pub max: usize,
}

impl Parse for ArityInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(ArityInput { max })
    }
}

fn idents(prefix: &str, n: usize) -> Vec<Ident> {
    (0..n).map(|i| format_ident!("{}{}", prefix, i)).collect()
}

fn vars(prefix: &str, n: usize) -> Vec<Ident> {
    (0..n)
        .map(|i| Ident::new(&format!("{}{}", prefix, i), Span::call_site()))
        .collect()
}

/// `InvokeOnce` / `InvokeMut` / `Invoke` for plain callables of arity `0..=max`.
pub fn expand_callable_impls(input: ArityInput) -> TokenStream {
    let mut impls = Vec::new();

    for n in 0..=input.max {
        let ts = idents("T", n);
        let vs = vars("t", n);
        let args = quote! { ( #(#ts,)* ) };

        impls.push(quote! {
            impl<F, R, #(#ts),*> InvokeOnce<#args> for F
            where
                F: FnOnce(#(#ts),*) -> R,
            {
                type Output = R;

                #[inline(always)]
                fn call_once(self, args: #args) -> <Self as InvokeOnce<#args>>::Output {
                    let ( #(#vs,)* ) = args;
                    self(#(#vs),*)
                }
            }

            impl<F, R, #(#ts),*> InvokeMut<#args> for F
            where
                F: FnMut(#(#ts),*) -> R,
            {
                #[inline(always)]
                fn call_mut(&mut self, args: #args) -> <Self as InvokeOnce<#args>>::Output {
                    let ( #(#vs,)* ) = args;
                    self(#(#vs),*)
                }
            }

            impl<F, R, #(#ts),*> Invoke<#args> for F
            where
                F: Fn(#(#ts),*) -> R,
            {
                #[inline(always)]
                fn call(&self, args: #args) -> <Self as InvokeOnce<#args>>::Output {
                    let ( #(#vs,)* ) = args;
                    self(#(#vs),*)
                }
            }
        });
    }

    quote! { #(#impls)* }
}

/// Invocation impls for `BindFront<F, (A0, ..)>` for every split of `max`
/// total arguments into bound and trailing parts.
pub fn expand_bind_front_impls(input: ArityInput) -> TokenStream {
    let mut impls = Vec::new();

    for bound in 0..=input.max {
        for trailing in 0..=(input.max - bound) {
            let a_tys = idents("A", bound);
            let t_tys = idents("T", trailing);
            let a_vars = vars("a", bound);
            let t_vars = vars("t", trailing);
            let idx: Vec<syn::Index> = (0..bound).map(syn::Index::from).collect();

            let bound_tuple = quote! { ( #(#a_tys,)* ) };
            let trailing_tuple = quote! { ( #(#t_tys,)* ) };
            let full = quote! { ( #(#a_tys,)* #(#t_tys,)* ) };

            impls.push(quote! {
                impl<F, #(#a_tys,)* #(#t_tys),*> InvokeOnce<#trailing_tuple> for BindFront<F, #bound_tuple>
                where
                    F: InvokeOnce<#full>,
                {
                    type Output = <F as InvokeOnce<#full>>::Output;

                    #[inline(always)]
                    fn call_once(self, args: #trailing_tuple) -> <Self as InvokeOnce<#trailing_tuple>>::Output {
                        let ( #(#t_vars,)* ) = args;
                        let BindFront { func, bound } = self;
                        let ( #(#a_vars,)* ) = bound;
                        func.call_once(( #(#a_vars,)* #(#t_vars,)* ))
                    }
                }

                impl<F, #(#a_tys,)* #(#t_tys),*> InvokeMut<#trailing_tuple> for BindFront<F, #bound_tuple>
                where
                    F: InvokeMut<#full>,
                    #(#a_tys: Clone,)*
                {
                    #[inline(always)]
                    fn call_mut(&mut self, args: #trailing_tuple) -> <Self as InvokeOnce<#trailing_tuple>>::Output {
                        let ( #(#t_vars,)* ) = args;
                        self.func.call_mut(( #(self.bound.#idx.clone(),)* #(#t_vars,)* ))
                    }
                }

                impl<F, #(#a_tys,)* #(#t_tys),*> Invoke<#trailing_tuple> for BindFront<F, #bound_tuple>
                where
                    F: Invoke<#full>,
                    #(#a_tys: Clone,)*
                {
                    #[inline(always)]
                    fn call(&self, args: #trailing_tuple) -> <Self as InvokeOnce<#trailing_tuple>>::Output {
                        let ( #(#t_vars,)* ) = args;
                        self.func.call(( #(self.bound.#idx.clone(),)* #(#t_vars,)* ))
                    }
                }
            });
        }
    }

    quote! { #(#impls)* }
}

/// `BoundArgs` and `PanicFree` for tuples of arity `0..=max`.
pub fn expand_tuple_impls(input: ArityInput) -> TokenStream {
    let mut impls = Vec::new();

    for n in 0..=input.max {
        let tys = idents("A", n);
        let tuple = quote! { ( #(#tys,)* ) };

        // Right fold: A0::Fact & (A1::Fact & (.. & Present))
        let mut fact = quote! { Present };
        for ty in tys.iter().rev() {
            fact = quote! { <<#ty as PanicFree>::Fact as Bool>::And<#fact> };
        }

        impls.push(quote! {
            impl<#(#tys: Bindable),*> BoundArgs for #tuple {
                const LEN: usize = #n;
            }

            impl<#(#tys: PanicFree),*> PanicFree for #tuple {
                type Fact = #fact;
            }
        });
    }

    quote! { #(#impls)* }
}
