use crate::{Args, Error, OptionSchema, parse_with};

/**
A type that can be built from parsed command-line options. Usually this is
derived with [`#[derive(Options)]`][derive@crate::Options], which generates
one schema per field, with the field type's
[`ARITY`][crate::parameter::Parameter::ARITY].

[`Options::schemas`] is the boundary between the type and the parser: the
parser doesn't care how the schemas were produced, only that they are
well-formed.
*/
pub trait Options: Sized {
    /// The schemas for every option this type can hold, in declaration order
    fn schemas() -> Vec<OptionSchema>;

    /// Build the type from [`Args`] that were parsed with
    /// [`schemas`][Options::schemas].
    fn from_args(args: &Args) -> Result<Self, Error>;
}

/**
Parse command-line tokens against the schemas of `T`, then build a `T` from
the result. The [`Args`] are returned as well, since they hold the command
parameters.
*/
pub fn parse_for<'arg, T: Options>(
    tokens: impl IntoIterator<Item = &'arg str>,
) -> Result<(T, Args), Error> {
    let schemas = T::schemas();
    let args = parse_with(tokens, &schemas)?;
    let options = T::from_args(&args)?;

    Ok((options, args))
}
