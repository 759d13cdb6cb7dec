use core::fmt::Display;
use core::str::FromStr;

use crate::{Args, Arity, Error};

/**
A [`Parameter`] or [`Value`] couldn't be created from the parameters of an
option.

This type contains no option name, because a parameter type doesn't know
which option it's associated with. [`load`] attaches that context when it
turns this into an [`Error`].
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// The option was absent, and this type has no sensible value for that
    Required,

    /// The parameter failed to parse into an instance of the type
    Invalid { param: String, message: String },
}

/**
A parameter is a type that can be built from the parameters collected for
one option.

The parameter trait is the "type" part of a typed option: its [`ARITY`]
becomes the arity of the option's schema, so that the parser only hands it
the parameters it can handle. By the time [`present`] is called, the schema
has already enforced that a [`Single`][Arity::Single] option has exactly one
parameter and a [`Flag`][Arity::Flag] has none.

For most types it makes more sense to implement [`Value`] (or the
[`ParsedValue`] marker) and use the type inside an [`Option`] or [`Vec`].

[`ARITY`]: Parameter::ARITY
[`present`]: Parameter::present
*/
pub trait Parameter: Sized {
    const ARITY: Arity;

    /**
    This option was absent from the command line and has no defaults.

    Most types should return [`ParameterError::Required`] here. However,
    there are plenty of cases where a type has a sensible behavior if it
    doesn't appear on the command line, such as a bool flag being false or a
    [`Vec`] being empty.
    */
    fn absent() -> Result<Self, ParameterError>;

    /// This option was present on the command line (or defaulted), with
    /// these parameters.
    fn present(params: &[String]) -> Result<Self, ParameterError>;
}

/// A type that can be parsed from a single option parameter.
pub trait Value: Sized {
    fn from_param(param: &str) -> Result<Self, ParameterError>;
}

/// For types with a [`FromStr`] implementation, [`ParsedValue`] automatically
/// gives them a [`Value`] implementation.
pub trait ParsedValue: FromStr {}

impl<T> Value for T
where
    T: ParsedValue,
    T::Err: Display,
{
    #[inline]
    fn from_param(param: &str) -> Result<Self, ParameterError> {
        param.parse().map_err(|err: T::Err| ParameterError::Invalid {
            param: param.to_owned(),
            message: err.to_string(),
        })
    }
}

/// Helper for [`Parameter::present`] on single-valued types: parse the first
/// parameter.
pub fn single<T: Value>(params: &[String]) -> Result<T, ParameterError> {
    params
        .first()
        .ok_or(ParameterError::Required)
        .and_then(|param| T::from_param(param))
}

/**
Load a typed option from parsed [`Args`]. This is what
[`#[derive(Options)]`][crate::Options] calls for each field.
*/
pub fn load<T: Parameter>(args: &Args, option: &str) -> Result<T, Error> {
    let result = match args.has_opt(option) {
        true => T::present(args.opt_params(option)),
        false => T::absent(),
    };

    result.map_err(|error| match error {
        ParameterError::Required => Error::MissingOption {
            option: option.to_owned(),
        },
        ParameterError::Invalid { param, message } => Error::InvalidParam {
            option: option.to_owned(),
            param,
            message,
        },
    })
}
