use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::{Args, Error, OptionSchema, Options, parse, parse_for, parse_with};

/// Helper type for loading arguments from the environment.
///
/// This type exists for roughly two purposes: to provide a convenient
/// owned container for args retrieved from [`std::env`], and to be an object
/// that the parse functions can borrow from. The parse functions themselves
/// never read process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedArguments {
    arguments: Vec<String>,
}

impl LoadedArguments {
    /// Load the arguments of the current process. Fails if any of them isn't
    /// valid UTF-8.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_os(std::env::args_os())
    }

    /// Load arguments from OS strings. The first one is the program name.
    pub fn from_os(arguments: impl IntoIterator<Item = OsString>) -> Result<Self, Error> {
        arguments
            .into_iter()
            .map(|argument| {
                argument.into_string().map_err(|argument| Error::InvalidUtf8 {
                    option: argument.to_string_lossy().into_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|arguments| Self { arguments })
    }

    /// Create from a list of arguments. The first one is the program name.
    pub fn new<A: Into<String>>(arguments: impl IntoIterator<Item = A>) -> Self {
        Self {
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// The program name exactly as it was invoked, or an empty string
    pub fn argv0(&self) -> &str {
        self.arguments.first().map(String::as_str).unwrap_or("")
    }

    /// The file name of the program, without its directory
    pub fn program_name(&self) -> &str {
        let argv0 = self.argv0();

        Path::new(argv0)
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or(argv0)
    }

    /// Every argument after the program name
    pub fn tokens(&self) -> impl Iterator<Item = &str> + Clone {
        self.arguments
            .get(1..)
            .unwrap_or(&[])
            .iter()
            .map(String::as_str)
    }

    pub fn parse(&self) -> Result<Args, Error> {
        parse(self.tokens())
    }

    pub fn parse_with(&self, schemas: &[OptionSchema]) -> Result<Args, Error> {
        parse_with(self.tokens(), schemas)
    }

    pub fn parse_for<T: Options>(&self) -> Result<(T, Args), Error> {
        parse_for(self.tokens())
    }
}
