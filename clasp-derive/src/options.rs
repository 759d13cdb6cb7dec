use std::collections::{HashMap, hash_map::Entry};

use itertools::Itertools as _;
use lazy_format::lazy_format;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Field, Fields, Ident, Token, punctuated::Punctuated, spanned::Spanned as _};

use crate::field::OptionFieldInfo;

pub fn derive_options_result(item: TokenStream2) -> syn::Result<TokenStream2> {
    let input: DeriveInput = syn::parse2(item)?;

    if let Some(param) = input.generics.params.first() {
        return Err(syn::Error::new(
            param.span(),
            "can't derive `Options` on a generic type",
        ));
    }

    match input.data {
        syn::Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => derive_options_struct(&input.ident, &fields.named),
            Fields::Unnamed(ref fields) => Err(syn::Error::new(
                fields.span(),
                "can't derive `Options` on a tuple struct",
            )),
            Fields::Unit => Err(syn::Error::new(
                input.span(),
                "can't derive `Options` on a unit struct",
            )),
        },
        syn::Data::Enum(_) => Err(syn::Error::new(
            input.span(),
            "can't derive `Options` on an enum",
        )),
        syn::Data::Union(_) => Err(syn::Error::new(
            input.span(),
            "can't derive `Options` on a union",
        )),
    }
}

fn detect_collision(known_tags: &mut HashMap<String, Span>, tag: &str, span: Span) -> syn::Result<()> {
    match known_tags.entry(tag.to_owned()) {
        Entry::Occupied(entry) => {
            let mut err1 = syn::Error::new(span, lazy_format!("duplicate option name {tag:?}"));
            let err2 = syn::Error::new(*entry.get(), "original use here");

            err1.combine(err2);
            Err(err1)
        }
        Entry::Vacant(entry) => {
            entry.insert(span);
            Ok(())
        }
    }
}

fn derive_options_struct(
    name: &Ident,
    fields: &Punctuated<Field, Token![,]>,
) -> syn::Result<TokenStream2> {
    let fields: Vec<OptionFieldInfo> = fields
        .iter()
        .map(OptionFieldInfo::from_field)
        .try_collect()?;

    {
        let mut known_tags = HashMap::new();

        for tag in fields.iter().flat_map(|field| field.tags()) {
            detect_collision(&mut known_tags, tag.as_str(), tag.span())?;
        }
    }

    let schemas = fields.iter().map(|field| {
        let ty = field.ty;
        let option = field.name.as_str();
        let aliases = field.aliases.iter().map(|alias| alias.as_str());
        let defaults = &field.defaults;
        let docs = &field.docs;

        quote! {
            ::clasp::OptionSchema::new(#option)
                .with_arity(<#ty as ::clasp::parameter::Parameter>::ARITY)
                #(.with_alias(#aliases))*
                #(.with_default(#defaults))*
                .with_description(#docs)
        }
    });

    let initializers = fields.iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let option = field.name.as_str();

        quote! {
            #ident: ::clasp::parameter::load::<#ty>(args, #option)?
        }
    });

    Ok(quote! {
        impl ::clasp::Options for #name {
            fn schemas() -> ::std::vec::Vec<::clasp::OptionSchema> {
                ::std::vec![#(#schemas,)*]
            }

            fn from_args(args: &::clasp::Args) -> ::core::result::Result<Self, ::clasp::Error> {
                ::core::result::Result::Ok(Self {
                    #(#initializers,)*
                })
            }
        }
    })
}
