use std::collections::BTreeMap;

/**
The result of parsing command-line tokens: the options that were observed (or
defaulted), each with its ordered list of parameters, and the ordered list of
command parameters that weren't associated with any option.

An option that was present but took no parameter maps to an empty list; this
is distinct from an option that is absent entirely. [`Args`] can only be
built by [`parse`][crate::parse] and friends, and is read-only afterwards.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    opt_params: BTreeMap<String, Vec<String>>,
    cmd_params: Vec<String>,
}

impl Args {
    /// Check if the option was present on the command line, or was given a
    /// default value by its schema.
    #[inline]
    #[must_use]
    pub fn has_opt(&self, option: &str) -> bool {
        self.opt_params.contains_key(option)
    }

    /// Get the first parameter of the option, or an empty string if the
    /// option is absent or took no parameter.
    #[inline]
    #[must_use]
    pub fn opt_param(&self, option: &str) -> &str {
        self.opt_params(option)
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Get all of the parameters of the option, in the order they appeared.
    /// Empty if the option is absent or took no parameter.
    #[inline]
    #[must_use]
    pub fn opt_params(&self, option: &str) -> &[String] {
        self.opt_params
            .get(option)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get the command parameters: every token that wasn't an option or an
    /// option's parameter, in the order they appeared.
    #[inline]
    #[must_use]
    pub fn cmd_params(&self) -> &[String] {
        &self.cmd_params
    }

    /// Iterate over all present options and their parameters, ordered by
    /// option name.
    pub fn options(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.opt_params
            .iter()
            .map(|(option, params)| (option.as_str(), params.as_slice()))
    }

    pub(crate) fn push_cmd_params<P>(&mut self, params: impl IntoIterator<Item = P>)
    where
        P: Into<String>,
    {
        self.cmd_params.extend(params.into_iter().map(Into::into));
    }

    /// Register the option, then append `params` to it. Touching an option
    /// with no params marks it as present.
    pub(crate) fn push_opt_params<P>(&mut self, option: &str, params: impl IntoIterator<Item = P>)
    where
        P: Into<String>,
    {
        self.opt_params
            .entry(option.to_owned())
            .or_default()
            .extend(params.into_iter().map(Into::into));
    }
}
