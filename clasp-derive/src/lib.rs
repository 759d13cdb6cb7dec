mod field;
mod options;

use proc_macro::TokenStream;

/**
Derive `clasp::Options` for a struct with named fields. Each field becomes
one option, whose arity comes from the field's type.

- `#[clasp(long = "name")]` sets the canonical option name. By default it's
  the field name in kebab-case.
- `#[clasp(alias = "n")]` adds an alias. May be repeated.
- `#[clasp(default = "value")]` adds a default parameter, used when the
  option is absent. May be repeated.
- Doc comments become the option's description.
*/
#[proc_macro_derive(Options, attributes(clasp))]
pub fn derive_options(item: TokenStream) -> TokenStream {
    match options::derive_options_result(item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
