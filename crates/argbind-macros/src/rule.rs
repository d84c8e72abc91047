use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Expr, Ident, ItemFn, LitStr, meta::ParseNestedMeta, spanned::Spanned};

/// Arguments of `#[register_rule(priority = N, name = "...")]`.
#[derive(Default)]
pub struct RuleArgs {
    priority: Option<Expr>,
    name: Option<LitStr>,
}

impl RuleArgs {
    pub fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("priority") {
            self.priority = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("name") {
            self.name = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported register_rule property, expected `priority` or `name`"))
        }
    }
}

/// Implementation of `#[register_rule(...)]`.
///
/// Leaves the decorated function unchanged and appends a
/// `#[::argbind::core::linkme::distributed_slice]` static that wires it into
/// `RULE_REGISTRY`.
pub fn expand(args: RuleArgs, func: ItemFn) -> syn::Result<TokenStream> {
    let sig = &func.sig;
    if !sig.inputs.is_empty() {
        return Err(syn::Error::new(
            sig.inputs.span(),
            "rule constructors take no arguments",
        ));
    }
    if sig.asyncness.is_some() || !sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            sig.span(),
            "rule constructors must be plain, non-generic functions",
        ));
    }

    let fn_name = &sig.ident;
    let fn_name_upper = fn_name.to_string().to_uppercase();
    let static_name = Ident::new(
        &format!("_RULE_REGISTER_{fn_name_upper}"),
        Span::call_site(),
    );

    let name = args
        .name
        .unwrap_or_else(|| LitStr::new(&fn_name.to_string(), fn_name.span()));
    let priority = args.priority.map_or_else(|| quote!(0), |expr| quote!(#expr));

    Ok(quote! {
        #func

        #[::argbind::core::linkme::distributed_slice(::argbind::core::RULE_REGISTRY)]
        #[linkme(crate = ::argbind::core::linkme)]
        static #static_name: ::argbind::core::RuleRegistration = ::argbind::core::RuleRegistration {
            name: #name,
            priority: #priority,
            factory: {
                fn factory() -> ::std::boxed::Box<dyn ::argbind::core::MatchRule> {
                    ::std::boxed::Box::new(#fn_name())
                }
                factory
            },
        };
    })
}
