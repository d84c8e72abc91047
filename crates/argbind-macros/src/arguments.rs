//! `#[derive(Arguments)]` implementation.
//!
//! Generates:
//!
//! 1. `impl ArgumentSchema` listing one `MarkedProperty` per `#[arg]` field
//! 2. an empty `impl LifecycleHandlers`, unless `#[arguments(lifecycle)]`

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, Lit, LitInt, LitStr, Meta,
    spanned::Spanned,
};

// ============================================================================
// Attribute structures
// ============================================================================

/// Parsed `#[arg(...)]` of one field.
#[derive(Default)]
struct ArgAttrs {
    switches: Vec<LitStr>,
    keys: Vec<LitStr>,
    position: Option<LitInt>,
    trailing: bool,
    required: bool,
    help: Option<LitStr>,
}

// ============================================================================
// Entry point
// ============================================================================

pub fn derive_arguments(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new(
                    input.span(),
                    "Arguments requires a struct with named fields",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new(
                input.span(),
                "Arguments cannot be derived for enums",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new(
                input.span(),
                "Arguments cannot be derived for unions",
            ));
        }
    };

    let custom_lifecycle = parse_struct_attrs(&input.attrs)?;

    let mut properties = Vec::new();
    for field in fields {
        if let Some(attrs) = parse_field_attrs(field)? {
            properties.push(generate_property(field, &attrs)?);
        }
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let lifecycle_impl = if custom_lifecycle {
        quote! {}
    } else {
        quote! {
            impl #impl_generics ::argbind::core::LifecycleHandlers for #name #ty_generics #where_clause {}
        }
    };

    Ok(quote! {
        impl #impl_generics ::argbind::core::ArgumentSchema for #name #ty_generics #where_clause {
            fn properties() -> ::std::vec::Vec<::argbind::core::MarkedProperty<Self>> {
                ::std::vec![#(#properties),*]
            }
        }

        #lifecycle_impl
    })
}

// ============================================================================
// Attribute parsing
// ============================================================================

/// Returns `true` for `#[arguments(lifecycle)]`.
fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut lifecycle = false;
    for attr in attrs {
        if attr.path().is_ident("arguments") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("lifecycle") {
                    lifecycle = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported #[arguments] property, expected `lifecycle`"))
                }
            })?;
        }
    }
    Ok(lifecycle)
}

/// Returns `None` for fields without `#[arg]`.
fn parse_field_attrs(field: &Field) -> syn::Result<Option<ArgAttrs>> {
    let mut found = None;

    for attr in &field.attrs {
        if !attr.path().is_ident("arg") {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new(attr.span(), "duplicate #[arg] attribute"));
        }

        let mut attrs = ArgAttrs::default();
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("switch") {
                attrs.switches.push(meta.value()?.parse()?);
            } else if meta.path.is_ident("key") {
                attrs.keys.push(meta.value()?.parse()?);
            } else if meta.path.is_ident("position") {
                attrs.position = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("trailing") {
                attrs.trailing = true;
            } else if meta.path.is_ident("required") {
                attrs.required = true;
            } else if meta.path.is_ident("help") {
                attrs.help = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error(
                    "unsupported #[arg] property, expected one of: \
                     switch, key, position, trailing, required, help",
                ));
            }
            Ok(())
        })?;

        if attrs.switches.is_empty() && attrs.keys.is_empty() && attrs.position.is_none() {
            return Err(syn::Error::new(
                attr.span(),
                "#[arg] needs at least one of `switch`, `key` or `position`",
            ));
        }
        if attrs.trailing && attrs.position.is_none() {
            return Err(syn::Error::new(
                attr.span(),
                "`trailing` requires `position`",
            ));
        }
        for lit in attrs.switches.iter().chain(&attrs.keys) {
            if lit.value().trim().is_empty() {
                return Err(syn::Error::new(lit.span(), "switches and keys cannot be blank"));
            }
        }
        if let Some(position) = &attrs.position {
            position.base10_parse::<usize>()?;
        }

        found = Some(attrs);
    }

    Ok(found)
}

/// Joins `///` lines into a single description.
fn doc_comment(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_string()),
                _ => None,
            },
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" "))
    }
}

// ============================================================================
// Code generation
// ============================================================================

fn generate_property(field: &Field, attrs: &ArgAttrs) -> syn::Result<TokenStream> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
    let ty = &field.ty;
    let name = ident.to_string();
    let name = name.trim_start_matches("r#");

    let mut marker = quote!(::argbind::core::ArgMarker::new());
    if !attrs.switches.is_empty() {
        let switches = &attrs.switches;
        marker = quote!(#marker.with_switches(&[#(#switches),*]));
    }
    if !attrs.keys.is_empty() {
        let keys = &attrs.keys;
        marker = quote!(#marker.with_keys(&[#(#keys),*]));
    }
    if let Some(position) = &attrs.position {
        marker = quote!(#marker.with_position(#position));
    }
    if attrs.trailing {
        marker = quote!(#marker.trailing());
    }
    if attrs.required {
        marker = quote!(#marker.required());
    }
    let description = attrs
        .help
        .clone()
        .or_else(|| doc_comment(&field.attrs).map(|doc| LitStr::new(&doc, Span::call_site())));
    if let Some(description) = description {
        marker = quote!(#marker.with_description(#description));
    }

    Ok(quote! {
        ::argbind::core::MarkedProperty::new(
            #name,
            #marker,
            |target: &mut Self, value: ::argbind::core::ArgValue| {
                <#ty as ::argbind::core::FromArgument>::assign(&mut target.#ident, value)
                    .map_err(|source| ::argbind::core::BindError::Conversion {
                        property: #name,
                        source,
                    })
            },
        )
    })
}
