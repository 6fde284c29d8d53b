//! Procedural macros used internally by the `arity` crate.
//!
//! Each macro takes a single integer literal, the largest arity to generate code for, and expands
//! to one block of trait impls per arity from zero up to and including that bound. The generated
//! code names its traits through `crate::` paths, so these macros are only meaningful when invoked
//! from inside `arity` itself.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Literal, TokenStream as TokenStream2},
    quote::{format_ident, quote},
    syn::{Ident, LitInt},
};

/// Generate the [`ToUnary`] and [`ToConstant`] impls connecting `Number<N>` with its unary
/// representation, for every `N` from zero up to the given bound.
///
/// [`ToUnary`]: https://docs.rs/arity/latest/arity/unary/trait.ToUnary.html
/// [`ToConstant`]: https://docs.rs/arity/latest/arity/unary/trait.ToConstant.html
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = match parse_bound(input) {
        Ok(max) => max,
        Err(error) => return error.to_compile_error().into(),
    };

    (0..=max)
        .map(|n| {
            let constant = Literal::usize_unsuffixed(n);
            let unary = unary_type(n);
            quote! {
                impl crate::unary::ToUnary for crate::unary::Number<#constant> {
                    type AsUnary = #unary;
                }

                impl crate::unary::ToConstant for #unary {
                    type AsConstant = crate::unary::Number<#constant>;
                }
            }
        })
        .collect::<TokenStream2>()
        .into()
}

/// Generate, for every tuple arity from zero up to the given bound: the tuple/list conversions,
/// the `Aggregate` impl, one `Get` impl per position, and the tuple-layout `Render` impl.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = match parse_bound(input) {
        Ok(max) => max,
        Err(error) => return error.to_compile_error().into(),
    };

    (0..=max).map(tuple_impls).collect::<TokenStream2>().into()
}

fn parse_bound(input: TokenStream) -> syn::Result<usize> {
    syn::parse::<LitInt>(input)?.base10_parse()
}

/// The unary type `S<S<...<Z>>>` with `n` successors.
fn unary_type(n: usize) -> TokenStream2 {
    (0..n).fold(quote!(crate::unary::Z), |inner, _| {
        quote!(crate::unary::S<#inner>)
    })
}

/// Nest a sequence of items into the inductive list shape `(a, (b, (c, ())))`.
fn nest<T: quote::ToTokens>(items: &[T]) -> TokenStream2 {
    items
        .iter()
        .rev()
        .fold(quote!(()), |tail, head| quote!((#head, #tail)))
}

fn tuple_impls(arity: usize) -> TokenStream2 {
    let params: Vec<Ident> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
    let bindings: Vec<Ident> = (0..arity).map(|i| format_ident!("t{}", i)).collect();

    let tuple_ty = quote!((#(#params,)*));
    let tuple_pat = quote!((#(#bindings,)*));
    let list_ty = nest(&params);
    let list_pat = nest(&bindings);

    let getters = params.iter().enumerate().map(|(position, param)| {
        let index = unary_type(position);
        let field = syn::Index::from(position);
        quote! {
            impl<#(#params),*> crate::aggregate::Get<#index> for #tuple_ty {
                type Output = #param;

                #[inline]
                fn get(&self) -> &#param {
                    &self.#field
                }
            }
        }
    });

    quote! {
        impl<#(#params),*> crate::tuple::Tuple for #tuple_ty {
            type AsList = #list_ty;

            #[inline]
            #[allow(clippy::unused_unit)]
            fn into_list(self) -> Self::AsList {
                let #tuple_pat = self;
                #list_pat
            }
        }

        impl<#(#params),*> crate::tuple::List for #list_ty {
            type AsTuple = #tuple_ty;

            #[inline]
            #[allow(clippy::unused_unit)]
            fn into_tuple(self) -> Self::AsTuple {
                let #list_pat = self;
                #tuple_pat
            }
        }

        impl<#(#params),*> crate::aggregate::Aggregate for #tuple_ty {
            type Arity = <<Self as crate::tuple::Tuple>::AsList as crate::tuple::HasLength>::Length;
        }

        #(#getters)*

        impl<#(#params),*> crate::render::Render for #tuple_ty
        where
            #(#params: crate::render::Render,)*
        {
            fn render<W: ::core::fmt::Write + ?Sized>(&self, out: &mut W) -> ::core::fmt::Result {
                crate::render::render_tuple(self, out)
            }
        }
    }
}
