use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, Fields, ItemStruct};

use super::msgs::{ERR_GENERICS, ERR_NAMED_FIELDS, ERR_REST_DUP};
use super::parse::{is_param_attr, parse_field_mode, FieldMode, RegistrableArgs};

pub fn registrable_for_struct(args: &RegistrableArgs, mut item: ItemStruct) -> syn::Result<TokenStream> {
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&item.generics, ERR_GENERICS));
    }
    let struct_ident = item.ident.clone();
    let named = match &mut item.fields {
        Fields::Named(named) => named,
        other => return Err(syn::Error::new_spanned(other, ERR_NAMED_FIELDS)),
    };

    let mut sig_calls = Vec::new();
    let mut takes = Vec::new();
    let mut idents = Vec::new();
    let mut rest: Option<syn::Ident> = None;
    for field in named.named.iter_mut() {
        let mode = parse_field_mode(&field.attrs)?;
        // #[param] 仅供本宏使用，展开后移除
        field.attrs.retain(|a| !is_param_attr(a));
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let key = ident.unraw().to_string();
        let ty = &field.ty;
        match mode {
            FieldMode::Rest => {
                if rest.is_some() {
                    return Err(syn::Error::new_spanned(&ident, ERR_REST_DUP));
                }
                sig_calls.push(quote! { .var_keyword(#key) });
                rest = Some(ident.clone());
            }
            FieldMode::Required => {
                sig_calls.push(quote! { .keyword_only(#key) });
                takes.push(quote! { let #ident: #ty = __args.take(#key)?; });
            }
            FieldMode::Default => {
                sig_calls.push(quote! { .keyword_only(#key) });
                takes.push(quote! { let #ident: #ty = __args.take_opt(#key)?.unwrap_or_default(); });
            }
            FieldMode::DefaultExpr(expr) => {
                sig_calls.push(quote! { .keyword_only(#key) });
                takes.push(quote! { let #ident: #ty = __args.take_opt(#key)?.unwrap_or_else(|| #expr); });
            }
            FieldMode::Object => {
                sig_calls.push(quote! { .keyword_only(#key) });
                takes.push(quote! { let #ident: #ty = __args.take_object(#key)?; });
            }
        }
        idents.push(ident);
    }
    // catch-all 字段最后接收剩余参数
    let finish = match &rest {
        Some(ident) => quote! { let #ident = __args; },
        None => quote! { let _ = __args; },
    };

    let class_name = match &args.class {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    };
    let kind_submit = match (&args.kind, &args.name) {
        (Some(kind), Some(name)) => quote! {
            mmg_registry::__private::inventory::submit! {
                mmg_registry::registry::Registration { kind: #kind, name: #name, constructor: __constructor }
            }
        },
        _ => quote! {},
    };

    Ok(quote! {
        #item
        impl mmg_registry::identity::Registrable for #struct_ident {
            fn type_name() -> &'static str {
                concat!(module_path!(), "::", stringify!(#struct_ident))
            }
            fn signature() -> mmg_registry::schema::Signature {
                mmg_registry::schema::Signature::new() #(#sig_calls)*
            }
            #[allow(unused_mut)]
            fn from_args(mut __args: mmg_registry::args::Args) -> mmg_registry::__private::anyhow::Result<Self> {
                #(#takes)*
                #finish
                ::core::result::Result::Ok(Self { #(#idents),* })
            }
        }
        #[doc(hidden)]
        const _: () = {
            fn __constructor() -> mmg_registry::constructor::ConstructorRef {
                mmg_registry::constructor::constructor_of::<#struct_ident>()
            }
            mmg_registry::__private::inventory::submit! {
                mmg_registry::registry::ClassRegistration { name: #class_name, constructor: __constructor }
            }
            #kind_submit
        };
    })
}
