/*!
The error type for everything in [`clasp`][crate]. Parsing stops at the first
error, so a single variant describes the whole failure.
 */

/**
Errors that can occur while parsing command-line tokens, validating an option
schema set, or converting parsed options into typed values. Every variant
carries the name of the option it concerns; see [`Error::option`].

Option names are the canonical schema name whenever the option resolved to a
schema, and the name as it appeared on the command line otherwise.
*/
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A token looked like an option but contained a character outside of
    /// the allowed classes
    #[error("invalid option {option:?}")]
    InvalidOption { option: String },

    /// The option matched no schema, and no wildcard schema was configured
    #[error("unconfigured option {option:?}")]
    UnconfiguredOption { option: String },

    /// The option's schema requires a parameter and none was supplied
    #[error("option {option:?} needs a parameter")]
    OptionNeedsParam { option: String },

    /// The option's schema forbids a parameter, but one was supplied
    #[error("option {option:?} doesn't take a parameter")]
    OptionTakesNoParam { option: String },

    /// The option's schema forbids multiple parameters, but got more than one
    #[error("option {option:?} was given more than one parameter")]
    OptionIsNotArray { option: String },

    /// A schema is multi-valued but doesn't take a parameter
    #[error("option {option:?} is configured as multi-valued, but doesn't take a parameter")]
    ConfigIsArrayButHasNoParam { option: String },

    /// A schema has default values but doesn't take a parameter
    #[error("option {option:?} is configured with defaults, but doesn't take a parameter")]
    ConfigHasDefaultsButHasNoParam { option: String },

    /// Two schemas (or one schema and its own aliases) claim the same name
    #[error("option name {option:?} is configured more than once")]
    DuplicateOptionName { option: String },

    /// A schema name or alias can never be written on the command line
    #[error("option name {option:?} isn't a valid option name")]
    InvalidOptionName { option: String },

    /// A typed option was absent and has no fallback value
    #[error("option {option:?} is required")]
    MissingOption { option: String },

    /// A typed option's parameter couldn't be converted
    #[error("invalid parameter {param:?} for option {option:?}: {message}")]
    InvalidParam {
        option: String,
        param: String,
        message: String,
    },

    /// A process argument wasn't valid UTF-8. `option` holds a lossy copy of
    /// the argument.
    #[error("argument {option:?} isn't valid UTF-8")]
    InvalidUtf8 { option: String },
}

impl Error {
    /// The option (or argument) this error concerns
    #[must_use]
    pub fn option(&self) -> &str {
        match self {
            Self::InvalidOption { option }
            | Self::UnconfiguredOption { option }
            | Self::OptionNeedsParam { option }
            | Self::OptionTakesNoParam { option }
            | Self::OptionIsNotArray { option }
            | Self::ConfigIsArrayButHasNoParam { option }
            | Self::ConfigHasDefaultsButHasNoParam { option }
            | Self::DuplicateOptionName { option }
            | Self::InvalidOptionName { option }
            | Self::MissingOption { option }
            | Self::InvalidParam { option, .. }
            | Self::InvalidUtf8 { option } => option,
        }
    }

    /// True for errors caused by the schema set itself, rather than by the
    /// tokens being parsed
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigIsArrayButHasNoParam { .. }
                | Self::ConfigHasDefaultsButHasNoParam { .. }
                | Self::DuplicateOptionName { .. }
                | Self::InvalidOptionName { .. }
        )
    }
}

impl From<clasp_parser::InvalidOption<'_>> for Error {
    fn from(error: clasp_parser::InvalidOption<'_>) -> Self {
        Self::InvalidOption {
            option: error.option().to_owned(),
        }
    }
}
