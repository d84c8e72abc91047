//! `#[lifecycle]` implementation.
//!
//! Strips the `#[on_*]` markers from the impl block, re-emits it unchanged
//! otherwise, and appends an `impl LifecycleHandlers` that lists one
//! `MarkedMethod` per marker.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, spanned::Spanned};

/// Marker attribute → `LifecycleKind` variant.
const MARKERS: [(&str, &str); 3] = [
    ("on_omitted", "ArgumentsOmitted"),
    ("on_error", "ArgumentError"),
    ("on_bound", "ArgumentsBound"),
];

pub fn expand(mut item: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new(
            path.span(),
            "#[lifecycle] must be placed on an inherent impl block",
        ));
    }

    let mut handlers = Vec::new();
    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        for kind in take_markers(method) {
            check_signature(method)?;
            let method_ident = &method.sig.ident;
            let method_name = method_ident.to_string();
            let kind = syn::Ident::new(kind, method_ident.span());
            handlers.push(quote! {
                ::argbind::core::MarkedMethod::new(
                    ::argbind::core::LifecycleKind::#kind,
                    #method_name,
                    |target: &mut Self| {
                        let _ = target.#method_ident();
                    },
                )
            });
        }
    }

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    Ok(quote! {
        #item

        impl #impl_generics ::argbind::core::LifecycleHandlers for #self_ty #where_clause {
            fn handlers(
                kind: ::argbind::core::LifecycleKind,
            ) -> ::std::option::Option<::std::vec::Vec<::argbind::core::MarkedMethod<Self>>> {
                let all: ::std::vec::Vec<::argbind::core::MarkedMethod<Self>> =
                    ::std::vec![#(#handlers),*];
                ::std::option::Option::Some(
                    all.into_iter().filter(|method| method.kind() == kind).collect(),
                )
            }
        }
    })
}

/// Removes the marker attributes from `method`, returning the kinds found.
fn take_markers(method: &mut ImplItemFn) -> Vec<&'static str> {
    let mut kinds = Vec::new();
    method.attrs.retain(|attr| {
        for (marker, kind) in MARKERS {
            if attr.path().is_ident(marker) {
                kinds.push(kind);
                return false;
            }
        }
        true
    });
    kinds
}

fn check_signature(method: &ImplItemFn) -> syn::Result<()> {
    let sig = &method.sig;
    if sig.asyncness.is_some() {
        return Err(syn::Error::new(
            sig.span(),
            "lifecycle handlers cannot be async",
        ));
    }
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            sig.generics.span(),
            "lifecycle handlers cannot be generic",
        ));
    }

    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(receiver)) if receiver.reference.is_some() => {}
        _ => {
            return Err(syn::Error::new(
                sig.span(),
                "lifecycle handlers must take `&self` or `&mut self`",
            ));
        }
    }
    if let Some(extra) = inputs.next() {
        return Err(syn::Error::new(
            extra.span(),
            "lifecycle handlers take no arguments besides the receiver",
        ));
    }
    Ok(())
}
