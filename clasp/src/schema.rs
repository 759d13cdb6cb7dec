/*!
Option schemas, and the resolver that maps the option names found on the
command line onto them.
 */

use std::collections::HashSet;
use std::fmt;
use std::iter;

use clasp_parser::is_valid_option_name;
use joinery::JoinableIterator as _;

use crate::Error;

/// The name of a wildcard schema, which applies to any option that isn't
/// otherwise configured.
pub const WILDCARD: &str = "*";

/// Whether an option takes a parameter, and whether it accepts more than one
/// across all of its occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arity {
    /// The option never takes a parameter, like `--verbose`
    #[default]
    Flag,

    /// The option takes exactly one parameter, like `--output <FILE>`
    Single,

    /// The option takes a parameter, and may appear several times to collect
    /// more of them, like `--include <DIR>...`
    Multiple,
}

impl Arity {
    #[inline]
    #[must_use]
    pub const fn takes_parameter(self) -> bool {
        matches!(self, Self::Single | Self::Multiple)
    }

    #[inline]
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::Multiple)
    }
}

/**
The configuration of a single option: its canonical name, the aliases that
also refer to it, its arity, and the default parameters it gets when it's
absent from the command line.

Schemas are built with a consuming builder:

```
use clasp::OptionSchema;

let schema = OptionSchema::new("include")
    .with_alias("I")
    .with_parameter(true)
    .with_multi_valued(true)
    .with_default("/usr/include");

assert!(schema.matches("I"));
assert_eq!(schema.to_string(), "--include, -I <VALUE>...");
```

A schema named [`WILDCARD`] (see [`OptionSchema::wildcard`]) accepts any
option that no other schema matches, applying its own arity to it. The
option keeps its own name in the parsed [`Args`][crate::Args]. A wildcard's
aliases and defaults are ignored.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub struct OptionSchema {
    name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    aliases: Vec<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    takes_parameter: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    multi_valued: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    defaults: Vec<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    description: String,
}

impl OptionSchema {
    /// Create a schema for a flag named `name`, with no aliases or defaults.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            takes_parameter: false,
            multi_valued: false,
            defaults: Vec::new(),
            description: String::new(),
        }
    }

    /// Create a wildcard schema, which accepts any unconfigured option as a
    /// flag. Use the builder methods to give it a different arity.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::new(WILDCARD)
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    #[must_use]
    pub fn with_aliases<A>(mut self, aliases: impl IntoIterator<Item = A>) -> Self
    where
        A: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, takes_parameter: bool) -> Self {
        self.takes_parameter = takes_parameter;
        self
    }

    #[must_use]
    pub fn with_multi_valued(mut self, multi_valued: bool) -> Self {
        self.multi_valued = multi_valued;
        self
    }

    /// Set both [`takes_parameter`][Self::takes_parameter] and
    /// [`is_multi_valued`][Self::is_multi_valued] from an [`Arity`]
    #[must_use]
    pub fn with_arity(self, arity: Arity) -> Self {
        self.with_parameter(arity.takes_parameter())
            .with_multi_valued(arity.is_multi_valued())
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.defaults.push(default.into());
        self
    }

    #[must_use]
    pub fn with_defaults<D>(mut self, defaults: impl IntoIterator<Item = D>) -> Self
    where
        D: Into<String>,
    {
        self.defaults.extend(defaults.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    #[inline]
    #[must_use]
    pub fn takes_parameter(&self) -> bool {
        self.takes_parameter
    }

    #[inline]
    #[must_use]
    pub fn is_multi_valued(&self) -> bool {
        self.multi_valued
    }

    #[inline]
    #[must_use]
    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The schema's [`Arity`], or [`None`] if it's multi-valued without
    /// taking a parameter.
    #[must_use]
    pub fn arity(&self) -> Option<Arity> {
        match (self.takes_parameter, self.multi_valued) {
            (false, false) => Some(Arity::Flag),
            (true, false) => Some(Arity::Single),
            (true, true) => Some(Arity::Multiple),
            (false, true) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.name == WILDCARD
    }

    /// Check if `option` is this schema's name or one of its aliases. Always
    /// false for a wildcard.
    #[must_use]
    pub fn matches(&self, option: &str) -> bool {
        !self.is_wildcard() && self.names().any(|name| name == option)
    }

    fn names(&self) -> impl Iterator<Item = &str> + Clone {
        iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// How an option name is written on the command line
struct Tag<'a>(&'a str);

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.chars().nth(1) {
            None => write!(f, "-{}", self.0),
            Some(_) => write!(f, "--{}", self.0),
        }
    }
}

/// A one-line synopsis of the option, like `--output, -o <VALUE>`
impl fmt::Display for OptionSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.is_wildcard() {
            true => f.write_str("<any option>")?,
            false => write!(f, "{}", self.names().map(Tag).join_with(", "))?,
        }

        match (self.takes_parameter, self.multi_valued) {
            (true, true) => f.write_str(" <VALUE>..."),
            (true, false) => f.write_str(" <VALUE>"),
            (false, _) => Ok(()),
        }
    }
}

/**
Check a schema set for mistakes that make it unusable, independent of any
command-line tokens. Schemas are checked in order, and the first problem is
returned:

- a name or alias that isn't a valid option name ([`Error::InvalidOptionName`])
- a name or alias used more than once, including two wildcards
  ([`Error::DuplicateOptionName`])
- a multi-valued schema that doesn't take a parameter
  ([`Error::ConfigIsArrayButHasNoParam`])
- a schema with defaults that doesn't take a parameter
  ([`Error::ConfigHasDefaultsButHasNoParam`])
*/
pub fn validate(schemas: &[OptionSchema]) -> Result<(), Error> {
    let mut seen = HashSet::new();

    for schema in schemas {
        // A wildcard's aliases are never matched, so they aren't checked
        let count = match schema.is_wildcard() {
            true => 1,
            false => usize::MAX,
        };

        for name in schema.names().take(count) {
            if name != WILDCARD && !is_valid_option_name(name) {
                return Err(Error::InvalidOptionName {
                    option: name.to_owned(),
                });
            }

            if !seen.insert(name) {
                return Err(Error::DuplicateOptionName {
                    option: name.to_owned(),
                });
            }
        }

        if schema.multi_valued && !schema.takes_parameter {
            return Err(Error::ConfigIsArrayButHasNoParam {
                option: schema.name.clone(),
            });
        }

        if !schema.defaults.is_empty() && !schema.takes_parameter {
            return Err(Error::ConfigHasDefaultsButHasNoParam {
                option: schema.name.clone(),
            });
        }
    }

    Ok(())
}

/// An option found on the command line, resolved against the schema set
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolved<'a, 's> {
    /// The name the option's parameters are recorded under
    pub name: &'a str,

    /// The schema whose arity applies, or [`None`] in zero-configuration mode
    pub schema: Option<&'s OptionSchema>,
}

/// Maps option names onto schemas. Assumes the schemas have already been
/// [validated][validate].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Resolver<'s> {
    schemas: &'s [OptionSchema],
    wildcard: Option<&'s OptionSchema>,
}

impl<'s> Resolver<'s> {
    pub fn new(schemas: &'s [OptionSchema]) -> Self {
        Self {
            schemas,
            wildcard: schemas.iter().find(|schema| schema.is_wildcard()),
        }
    }

    pub fn schemas(&self) -> &'s [OptionSchema] {
        self.schemas
    }

    pub fn resolve<'a>(&'a self, option: &'a str) -> Result<Resolved<'a, 's>, Error> {
        if self.schemas.is_empty() {
            return Ok(Resolved {
                name: option,
                schema: None,
            });
        }

        if let Some(schema) = self.schemas.iter().find(|schema| schema.matches(option)) {
            return Ok(Resolved {
                name: schema.name(),
                schema: Some(schema),
            });
        }

        match self.wildcard {
            Some(wildcard) => Ok(Resolved {
                name: option,
                schema: Some(wildcard),
            }),
            None => Err(Error::UnconfiguredOption {
                option: option.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schemas() -> Vec<OptionSchema> {
        vec![
            OptionSchema::new("foo-bar").with_alias("f"),
            OptionSchema::new("baz")
                .with_aliases(["z", "zz"])
                .with_arity(Arity::Multiple),
        ]
    }

    #[test]
    fn resolves_names_and_aliases() {
        let schemas = schemas();
        let resolver = Resolver::new(&schemas);

        let resolved = resolver.resolve("f").unwrap();
        assert_eq!(resolved.name, "foo-bar");
        assert_eq!(resolved.schema, Some(&schemas[0]));

        let resolved = resolver.resolve("zz").unwrap();
        assert_eq!(resolved.name, "baz");
        assert_eq!(resolved.schema, Some(&schemas[1]));

        assert_eq!(
            resolver.resolve("qux").unwrap_err(),
            Error::UnconfiguredOption {
                option: "qux".to_owned()
            }
        );
    }

    #[test]
    fn wildcard_keeps_the_observed_name() {
        let mut schemas = schemas();
        schemas.push(OptionSchema::wildcard().with_parameter(true));
        let resolver = Resolver::new(&schemas);

        let resolved = resolver.resolve("qux").unwrap();
        assert_eq!(resolved.name, "qux");
        assert!(resolved.schema.unwrap().is_wildcard());

        assert_eq!(resolver.resolve("z").unwrap().name, "baz");
    }

    #[test]
    fn empty_schema_set_accepts_anything() {
        let resolver = Resolver::new(&[]);
        let resolved = resolver.resolve("anything").unwrap();

        assert_eq!(resolved.name, "anything");
        assert!(resolved.schema.is_none());
    }

    #[test]
    fn wildcard_never_matches_by_name() {
        let wildcard = OptionSchema::wildcard();
        assert!(!wildcard.matches("*"));
        assert!(!wildcard.matches("x"));
    }

    #[test]
    fn validation() {
        assert_eq!(validate(&schemas()), Ok(()));
        assert_eq!(validate(&[]), Ok(()));

        let invalid = |schemas: &[OptionSchema]| validate(schemas).unwrap_err();

        assert_eq!(
            invalid(&[OptionSchema::new("")]),
            Error::InvalidOptionName {
                option: String::new()
            }
        );
        assert_eq!(
            invalid(&[OptionSchema::new("ok").with_alias("-o")]),
            Error::InvalidOptionName {
                option: "-o".to_owned()
            }
        );
        assert_eq!(
            invalid(&[
                OptionSchema::new("foo").with_alias("f"),
                OptionSchema::new("far").with_alias("f"),
            ]),
            Error::DuplicateOptionName {
                option: "f".to_owned()
            }
        );
        assert_eq!(
            invalid(&[OptionSchema::wildcard(), OptionSchema::wildcard()]),
            Error::DuplicateOptionName {
                option: "*".to_owned()
            }
        );
        assert_eq!(
            invalid(&[OptionSchema::new("foo").with_multi_valued(true)]),
            Error::ConfigIsArrayButHasNoParam {
                option: "foo".to_owned()
            }
        );
        assert_eq!(
            invalid(&[OptionSchema::new("foo").with_default("1")]),
            Error::ConfigHasDefaultsButHasNoParam {
                option: "foo".to_owned()
            }
        );
    }

    #[test]
    fn arity_round_trips_through_the_builder() {
        for arity in [Arity::Flag, Arity::Single, Arity::Multiple] {
            assert_eq!(OptionSchema::new("x").with_arity(arity).arity(), Some(arity));
        }

        assert_eq!(OptionSchema::new("x").with_multi_valued(true).arity(), None);
    }

    #[test]
    fn synopsis() {
        let schemas = schemas();
        assert_eq!(schemas[0].to_string(), "--foo-bar, -f");
        assert_eq!(schemas[1].to_string(), "--baz, -z, --zz <VALUE>...");
        assert_eq!(
            OptionSchema::wildcard().with_parameter(true).to_string(),
            "<any option> <VALUE>"
        );
    }
}
