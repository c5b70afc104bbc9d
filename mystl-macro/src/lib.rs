//! Procedural macros used by and exported from the [`mystl`](https://docs.rs/mystl) crate.
//!
//! The `impl_*`/`generate_*` macros only make sense inside `mystl` itself: they emit the
//! per-arity trait implementations that cannot be written inductively. The derive macros are for
//! downstream element types.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    proc_macro2::{Literal, Span, TokenStream as TokenStream2},
    proc_macro_crate::{crate_name, FoundCrate},
    quote::{format_ident, quote},
    syn::{parse_macro_input, parse_quote, DeriveInput, Ident, LitInt},
};

/// Emit the per-arity impls of `Types`, `List` and `TupleLike`, the implicit forwarding
/// `From<(A0, ...)>` for `Tuple<(T0, ...)>`, and the conversion from `Tuple<(T0, ...)>` back to
/// `(T0, ...)`, for every arity from zero up to the given bound.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max = match max.base10_parse::<usize>() {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };
    (0..=max).map(impl_tuple).collect::<TokenStream2>().into()
}

fn impl_tuple(arity: usize) -> TokenStream2 {
    let ts: Vec<Ident> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
    let args: Vec<Ident> = (0..arity).map(|i| format_ident!("A{}", i)).collect();
    let vs: Vec<Ident> = (0..arity).map(|i| format_ident!("t{}", i)).collect();

    let flat = quote!((#(#ts,)*));
    let flat_args = quote!((#(#args,)*));
    let flat_vals = quote!((#(#vs,)*));
    let list = nested(&ts);
    let list_vals = nested(&vs);

    let doc = format!("A flat tuple of {} element(s).", arity);

    quote! {
        #[doc = #doc]
        impl<#(#ts),*> crate::list::Types for #flat {
            type AsList = #list;

            #[allow(clippy::unused_unit)]
            fn into_list(self) -> Self::AsList {
                let #flat_vals = self;
                #list_vals
            }
        }

        impl<#(#ts),*> crate::list::List for #list {
            type AsTypes = #flat;

            #[allow(clippy::unused_unit)]
            fn into_types(self) -> Self::AsTypes {
                let #list_vals = self;
                #flat_vals
            }
        }

        impl<#(#ts),*> crate::tuple::TupleLike for #flat {
            type Flat = Self;

            fn into_flat(self) -> Self {
                self
            }
        }

        impl<#(#ts),*> ::core::convert::From<crate::Tuple<#flat>> for #flat {
            fn from(tuple: crate::Tuple<#flat>) -> Self {
                tuple.into_inner()
            }
        }

        impl<#(#ts,)* #(#args),*> ::core::convert::From<#flat_args> for crate::Tuple<#flat>
        where
            #(#args: ::core::convert::Into<#ts>,)*
        {
            fn from(args: #flat_args) -> Self {
                Self::construct(args)
            }
        }
    }
}

/// Build the inductive list `(x0, (x1, (..., ())))` out of a sequence of tokens.
fn nested(items: &[Ident]) -> TokenStream2 {
    items
        .iter()
        .rev()
        .fold(quote!(()), |rest, item| quote!((#item, #rest)))
}

/// Emit `ToUnary` for `Number<N>` and `ToConstant` for its unary equivalent, for every `N` from
/// zero up to the given bound.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max = match max.base10_parse::<usize>() {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut unary = quote!(Z);
    let mut impls = TokenStream2::new();
    for n in 0..=max {
        let lit = Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl ToUnary for Number<#lit> {
                type AsUnary = #unary;
            }

            impl ToConstant for #unary {
                type AsConstant = Number<#lit>;
            }
        });
        unary = quote!(S<#unary>);
    }
    impls.into()
}

/// Emit the type synonyms `_0`, `_1`, ... for unary numbers up to the given bound.
#[proc_macro]
pub fn generate_unary_types(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max = match max.base10_parse::<usize>() {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut out = quote! {
        /// The type-level number 0.
        pub type _0 = Z;
    };
    for n in 1..=max {
        let name = Ident::new(&format!("_{}", n), Span::call_site());
        let prev = Ident::new(&format!("_{}", n - 1), Span::call_site());
        let doc = format!("The type-level number {}.", n);
        out.extend(quote! {
            #[doc = #doc]
            pub type #name = S<#prev>;
        });
    }
    out.into()
}

/// Emit the value constants `_0`, `_1`, ... inhabiting the synonyms from
/// [`generate_unary_types!`](macro@generate_unary_types).
#[proc_macro]
pub fn generate_unary_constants(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    let max = match max.base10_parse::<usize>() {
        Ok(max) => max,
        Err(e) => return e.to_compile_error().into(),
    };

    let mut out = quote! {
        /// The value-level number 0.
        pub const _0: _0 = Z;
    };
    for n in 1..=max {
        let name = Ident::new(&format!("_{}", n), Span::call_site());
        let prev = Ident::new(&format!("_{}", n - 1), Span::call_site());
        let doc = format!("The value-level number {}.", n);
        out.extend(quote! {
            #[doc = #doc]
            pub const #name: #name = S(#prev);
        });
    }
    out.into()
}

/// Derive `mystl::traits::Assign<U>` for every `U: Into<Self>`, making the type usable as an
/// assignable tuple or pair element.
///
/// ```
/// use mystl::prelude::*;
///
/// #[derive(Debug, PartialEq, mystl::Assign)]
/// struct Meters(f64);
///
/// let mut t = Tuple::new((Meters(1.0), 2u8));
/// t.assign(Tuple::new((Meters(3.0), 4u8)));
/// assert_eq!(t.get::<0>(), &Meters(3.0));
/// ```
#[proc_macro_derive(Assign)]
pub fn derive_assign(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let krate = mystl_path();
    let name = &input.ident;

    let mut generics = input.generics.clone();
    generics.params.push(parse_quote!(__Rhs));
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(__Rhs: ::core::convert::Into<Self>));
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::traits::Assign<__Rhs> for #name #ty_generics #where_clause {
            fn assign(&mut self, rhs: __Rhs) {
                *self = ::core::convert::Into::into(rhs);
            }
        }
    }
    .into()
}

/// Derive the marker `mystl::traits::ImplicitDefault`, declaring that `Default` may be used
/// implicitly, as `mystl::init` does.
#[proc_macro_derive(ImplicitDefault)]
pub fn derive_implicit_default(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let krate = mystl_path();
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::traits::ImplicitDefault for #name #ty_generics #where_clause {}
    }
    .into()
}

/// The path to the `mystl` crate as seen from the invocation site, honoring renames in the
/// caller's `Cargo.toml`.
fn mystl_path() -> TokenStream2 {
    match crate_name("mystl") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) | Err(_) => quote!(::mystl),
    }
}
