use darling::{FromAttributes as _, util::SpannedValue};
use heck::ToKebabCase as _;
use itertools::Itertools as _;
use syn::{Attribute, Expr, Field, Ident, Type, ext::IdentExt as _, spanned::Spanned as _};

#[derive(darling::FromAttributes, Debug)]
#[darling(attributes(clasp))]
struct RawParsedAttr {
    long: Option<SpannedValue<String>>,

    #[darling(multiple)]
    alias: Vec<SpannedValue<String>>,

    #[darling(multiple)]
    default: Vec<String>,
}

pub struct OptionFieldInfo<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub name: SpannedValue<String>,
    pub aliases: Vec<SpannedValue<String>>,
    pub defaults: Vec<String>,
    pub docs: String,
}

impl<'a> OptionFieldInfo<'a> {
    pub fn from_field(field: &'a Field) -> syn::Result<Self> {
        let parsed = RawParsedAttr::from_attributes(&field.attrs)?;
        let docs = compute_docs(&field.attrs)?;

        let ident = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new(field.span(), "can't derive `Options` on tuple struct fields")
        })?;

        let name = check_option_name(parsed.long.unwrap_or_else(|| {
            SpannedValue::new(ident.unraw().to_string().to_kebab_case(), ident.span())
        }))?;

        let aliases: Vec<_> = parsed.alias.into_iter().map(check_option_name).try_collect()?;

        Ok(Self {
            ident,
            ty: &field.ty,
            name,
            aliases,
            defaults: parsed.default,
            docs,
        })
    }

    /// The canonical name, followed by all the aliases
    pub fn tags(&self) -> impl Iterator<Item = &SpannedValue<String>> {
        [&self.name].into_iter().chain(&self.aliases)
    }
}

pub fn compute_docs(attrs: &[Attribute]) -> syn::Result<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter_map(|attr| match attr.meta {
            syn::Meta::NameValue(ref meta) => Some(meta),
            _ => None,
        })
        .filter(|meta| meta.path.is_ident("doc"))
        .map(|meta| match meta.value {
            Expr::Lit(ref lit) => match lit.lit {
                syn::Lit::Str(ref lit) => Ok(lit.value()),
                _ => Err(syn::Error::new(meta.span(), "malformed #[doc] attribute")),
            },
            Expr::Macro(ref expr) => Err(syn::Error::new(
                expr.span(),
                "macro #[doc] attributes aren't supported",
            )),
            _ => Err(syn::Error::new(meta.span(), "malformed #[doc] attribute")),
        })
        .map_ok(|doc| doc.trim().to_owned())
        .try_collect()?;

    Ok(lines.join("\n").trim().to_owned())
}

fn check_option_name(name: SpannedValue<String>) -> syn::Result<SpannedValue<String>> {
    if name.starts_with("--") {
        Err(syn::Error::new(
            name.span(),
            "option names don't need to start with --; this is handled automatically",
        ))
    } else if name.starts_with('-') {
        Err(syn::Error::new(name.span(), "option names don't start with '-'"))
    } else if name.contains('=') {
        Err(syn::Error::new(
            name.span(),
            "option names must not include an '=', as it is the parameter separator",
        ))
    } else if !clasp_parser::is_valid_option_name(&name) {
        Err(syn::Error::new(
            name.span(),
            "option names must start with an ascii letter, followed by ascii letters, digits, or '-'",
        ))
    } else {
        Ok(name)
    }
}
