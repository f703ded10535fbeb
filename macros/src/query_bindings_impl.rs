use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse2,
    spanned::Spanned,
    Attribute, Data, DeriveInput, Fields, Ident, LitStr, Result, Token,
};

pub fn derive_query_bindings(input: TokenStream) -> Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    if !input.generics.params.is_empty() {
        bail!(
            input.generics.span(),
            "`QueryBindings` can not be derived for generic types"
        );
    }
    let Data::Struct(data) = &input.data else {
        bail!(Span::call_site(), "`QueryBindings` can only be derived for structs");
    };
    let Fields::Named(fields) = &data.fields else {
        bail!(
            data.fields.span(),
            "`QueryBindings` requires a struct with named fields"
        );
    };

    let ty_ident = &input.ident;
    let name = ty_ident.unraw().to_string();
    let mut registers = Vec::new();
    let mut checks = Vec::new();
    for field in &fields.named {
        let Some(args) = QueryArgs::from_attrs(&field.attrs)? else {
            continue;
        };
        let Some(field_ident) = &field.ident else {
            bail!(field.span(), "expected a named field");
        };
        let key = field_ident.unraw().to_string();
        let slot_fn = format_ident!("__query_binding_slot_{}", key);
        let field_ty = &field.ty;
        let parameter = &args.parameter;
        let QueryArgs {
            push_history_state,
            use_json,
            export,
            ..
        } = args;
        let read_only_message = format!(
            "can not bind read-only value: {name}.{key} (add `export` to its `#[query]` attribute)"
        );
        checks.push(quote! {
            const _: () = if <#field_ty as ::query_binding::SlotAccess>::READ_ONLY && !#export {
                ::core::panic!(#read_only_message)
            };
        });
        registers.push(quote! {
            {
                fn #slot_fn(this: &mut #ty_ident) -> &mut dyn ::query_binding::ParamSlot {
                    &mut this.#field_ident
                }
                bindings.register::<#field_ty>(
                    #key,
                    #parameter,
                    ::query_binding::BindingOptions::new()
                        .push_history_state(#push_history_state)
                        .use_json(#use_json)
                        .export(#export),
                    #slot_fn,
                )?;
            }
        });
    }

    Ok(quote! {
        #(#checks)*

        #[automatically_derived]
        impl ::query_binding::QueryBindings for #ty_ident {
            const NAME: &'static str = #name;

            fn register(
                bindings: &mut ::query_binding::ClassBindings<Self>,
            ) -> ::core::result::Result<(), ::query_binding::ReadOnlyBindingError> {
                #(#registers)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

struct QueryArgs {
    parameter: LitStr,
    push_history_state: bool,
    use_json: bool,
    export: bool,
}

impl QueryArgs {
    fn from_attrs(attrs: &[Attribute]) -> Result<Option<Self>> {
        let mut args = None;
        for attr in attrs {
            if !attr.path().is_ident("query") {
                continue;
            }
            if args.is_some() {
                bail!(attr.span(), "duplicate `#[query]` attribute");
            }
            args = Some(attr.parse_args::<Self>()?);
        }
        Ok(args)
    }
}

impl Parse for QueryArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let parameter: LitStr = input.parse()?;
        if parameter.value().is_empty() {
            bail!(parameter.span(), "query parameter name must not be empty");
        }
        let mut args = Self {
            parameter,
            push_history_state: false,
            use_json: false,
            export: false,
        };
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let option: Ident = input.parse()?;
            let flag = if option == "push_history_state" {
                &mut args.push_history_state
            } else if option == "use_json" {
                &mut args.use_json
            } else if option == "export" {
                &mut args.export
            } else {
                bail!(
                    option.span(),
                    "unknown option `{option}`, expected `push_history_state`, `use_json` or `export`"
                );
            };
            if *flag {
                bail!(option.span(), "duplicate option `{option}`");
            }
            *flag = true;
        }
        Ok(args)
    }
}
