#![no_std]

/*!
Low-level classification of command-line tokens. Takes care of distinctions
between long options, short options (and clusters of them), command
parameters, and the `--` terminator. No schema handling happens here; whether
an option consumes the following token is decided by the [`Visitor`].
Usually this is too low level to use directly.
*/

mod class;

use core::fmt;

pub use class::{is_option_continue, is_option_start, is_valid_option_name};

/**
A token that looked like an option but contained a character outside of the
allowed classes. For long options this is the whole text after the `--`
(including any `=value`); for short options it's the single offending
character.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOption<'arg> {
    option: &'arg str,
}

impl<'arg> InvalidOption<'arg> {
    #[inline]
    #[must_use]
    pub const fn new(option: &'arg str) -> Self {
        Self { option }
    }

    #[inline]
    #[must_use]
    pub const fn option(&self) -> &'arg str {
        self.option
    }
}

impl fmt::Display for InvalidOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid option {:?}", self.option)
    }
}

impl core::error::Error for InvalidOption<'_> {}

/**
The [`ArgumentsParser`] type operates by passing the tokens it classifies into
a [`Visitor`], to be handled.

Option names passed to the visitor have already been checked against the
option character classes. Short options are always exactly one character.
 */
pub trait Visitor<'arg> {
    type Value;

    /// A bare token that isn't an option, or any token after a `--`
    fn visit_command_param(self, param: &'arg str) -> Self::Value;

    /// A long option that definitely has a parameter, because it was given
    /// as `--option=param`. The parameter may be empty.
    fn visit_long_option(self, option: &'arg str, param: &'arg str) -> Self::Value;

    /// A long option without an inline parameter, such as `--option`
    fn visit_long(self, option: &'arg str, param: impl ParamAccess<'arg>) -> Self::Value;

    /// The last short option of a cluster that definitely has a parameter,
    /// because it was given as `-abc=param`
    fn visit_short_option(self, option: &'arg str, param: &'arg str) -> Self::Value;

    /// A short option without an inline parameter, such as `-o`, or any
    /// short option in a cluster that isn't the last one
    fn visit_short(self, option: &'arg str, param: impl ParamAccess<'arg>) -> Self::Value;
}

/**
[`ParamAccess`] allows a visitor to decide if a given option takes a parameter,
based on the identity of the option.

Consider `--foo bar`. Is this a pair of tokens (the flag `--foo` and the
command parameter `bar`) or a single option `--foo bar` that takes a
parameter? The [`ArgumentsParser`] can't independently classify a given token,
so instead, a visitor can request a parameter via this trait only for options
that need them.
*/
pub trait ParamAccess<'arg>: Sized {
    /**
    Get a parameter from the parser. This should only be called by options
    that need it; flags should simply ignore it, so that the next token can be
    classified independently.

    The next token is returned verbatim, even if it is `--` or looks like an
    option. This returns [`None`] if the tokens have been exhausted, or if
    this option sits in the middle of a short cluster like `-abc`, where only
    `c` is eligible for a parameter.
    */
    fn take(self) -> Option<&'arg str>;
}

#[derive(Debug, Clone, Copy)]
enum State<'arg> {
    Ready,
    CommandParamsOnly,

    // The unprocessed, non-empty tail of a short cluster like `-abc`
    ShortCluster(&'arg str),
}

/**
An `ArgumentsParser` is the main entry point into `clasp_parser`. It
classifies tokens in each call to [`next_arg`][Self::next_arg], sending them
to the given [`Visitor`]. It handles option syntax, short clusters, inline
`=param` values, and the `--` terminator.

`clasp_parser` operates entirely on borrowed data. The ubiquitous `'arg`
lifetime refers to the borrowed tokens.
*/
#[derive(Debug, Clone)]
pub struct ArgumentsParser<'arg, I> {
    state: State<'arg>,
    tokens: I,
}

impl<'arg, I> ArgumentsParser<'arg, I>
where
    I: Iterator<Item = &'arg str>,
{
    /**
    Create a new [`ArgumentsParser`] from an iterator of tokens. This list
    should *exclude* the name of the program, which is commonly passed as the
    first argument in the process argument list.
     */
    #[inline]
    #[must_use]
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            state: State::Ready,
            tokens: tokens.into_iter(),
        }
    }

    /// Put `self` into a `CommandParamsOnly` state, then process the next
    /// token as a command parameter
    #[inline]
    fn command_param_only<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        debug_assert!(!matches!(self.state, State::ShortCluster(_)));

        self.state = State::CommandParamsOnly;
        self.tokens
            .next()
            .map(|param| visitor.visit_command_param(param))
    }

    fn handle_long<V>(&mut self, long: &'arg str, visitor: V) -> Result<V::Value, InvalidOption<'arg>>
    where
        V: Visitor<'arg>,
    {
        let (option, param) = match split_once(long, b'=') {
            Some((option, param)) => (option, Some(param)),
            None => (long, None),
        };

        if !is_valid_option_name(option) {
            return Err(InvalidOption::new(long));
        }

        Ok(match param {
            Some(param) => visitor.visit_long_option(option, param),
            None => visitor.visit_long(option, self.standard_access()),
        })
    }

    /// Handle a single character of a short cluster. `rest` is whatever
    /// follows it in the token: empty, an `=param`, or more short options.
    fn handle_short<V>(
        &mut self,
        option: &'arg str,
        rest: &'arg str,
        visitor: V,
    ) -> Result<V::Value, InvalidOption<'arg>>
    where
        V: Visitor<'arg>,
    {
        self.state = State::Ready;

        if !option.starts_with(is_option_start) {
            return Err(InvalidOption::new(option));
        }

        if let Some(param) = rest.strip_prefix('=') {
            return Ok(visitor.visit_short_option(option, param));
        }

        Ok(match rest.is_empty() {
            true => visitor.visit_short(option, self.standard_access()),
            false => {
                self.state = State::ShortCluster(rest);
                visitor.visit_short(option, ClusterParamAccess)
            }
        })
    }

    #[inline]
    fn standard_access(&mut self) -> StandardParamAccess<'_, I> {
        debug_assert!(matches!(self.state, State::Ready));

        StandardParamAccess {
            tokens: &mut self.tokens,
        }
    }

    /**
    Classify the next unit of input (a whole token, or a single character of
    a short cluster) and pass it to `visitor`. Returns [`None`] once the
    tokens are exhausted. The `--` terminator is never passed to the visitor.
    */
    pub fn next_arg<V>(&mut self, visitor: V) -> Option<Result<V::Value, InvalidOption<'arg>>>
    where
        V: Visitor<'arg>,
    {
        match self.state {
            State::Ready => match self.tokens.next()? {
                "--" => self.command_param_only(visitor).map(Ok),
                token => Some(match token.strip_prefix("--") {
                    Some(long) => self.handle_long(long, visitor),
                    None => match token.strip_prefix('-').and_then(split_first_char) {
                        Some((option, rest)) => self.handle_short(option, rest, visitor),
                        None => Ok(visitor.visit_command_param(token)),
                    },
                }),
            },
            State::CommandParamsOnly => self.tokens.next().map(|param| Ok(visitor.visit_command_param(param))),
            State::ShortCluster(cluster) => match split_first_char(cluster) {
                Some((option, rest)) => Some(self.handle_short(option, rest, visitor)),
                None => {
                    self.state = State::Ready;
                    self.next_arg(visitor)
                }
            },
        }
    }
}

/// ParamAccess implementation that takes the next token, verbatim.
struct StandardParamAccess<'a, I> {
    tokens: &'a mut I,
}

impl<'arg, I> ParamAccess<'arg> for StandardParamAccess<'_, I>
where
    I: Iterator<Item = &'arg str>,
{
    #[inline]
    fn take(self) -> Option<&'arg str> {
        self.tokens.next()
    }
}

/// ParamAccess implementation for short options in the middle of a cluster,
/// which are never eligible for a parameter.
struct ClusterParamAccess;

impl<'arg> ParamAccess<'arg> for ClusterParamAccess {
    #[inline]
    fn take(self) -> Option<&'arg str> {
        None
    }
}

fn split_once(input: &str, delimiter: u8) -> Option<(&str, &str)> {
    // The delimiter is ascii, so `i` is always a char boundary
    memchr::memchr(delimiter, input.as_bytes()).map(|i| (&input[..i], &input[i + 1..]))
}

/// Split a string into its first character (as a string) and the rest
fn split_first_char(input: &str) -> Option<(&str, &str)> {
    input
        .chars()
        .next()
        .map(|c| input.split_at(c.len_utf8()))
}
