mod emit;
mod msgs;
mod parse;

use proc_macro::TokenStream;
use syn::{parse_macro_input, Item};

use emit::registrable_for_struct;
use msgs::ERR_TARGET;
use parse::RegistrableArgs;

pub fn entrypoint(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut reg_args = RegistrableArgs::default();
    let parser = syn::meta::parser(|meta| reg_args.parse(meta));
    parse_macro_input!(args with parser);
    let item_any = parse_macro_input!(input as Item);
    let out = match item_any {
        Item::Struct(item) => reg_args
            .validate()
            .and_then(|()| registrable_for_struct(&reg_args, item)),
        other => Err(syn::Error::new_spanned(other, ERR_TARGET)),
    };
    out.unwrap_or_else(syn::Error::into_compile_error).into()
}
