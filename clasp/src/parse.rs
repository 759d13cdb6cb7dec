use clasp_parser::{ArgumentsParser, ParamAccess, Visitor};
use tracing::{debug, trace};

use crate::{
    Args, Error,
    schema::{self, OptionSchema, Resolved, Resolver},
};

/**
Parse command-line tokens without any configuration.

Every syntactically valid long or short option is accepted and recorded under
its own name. No option consumes a following token; parameters can only be
given inline, as `--name=value` or `-n=value`.

```
let args = clasp::parse(["--foo-bar=A", "-a", "--baz", "-bc=3", "qux"]).unwrap();

assert!(args.has_opt("a"));
assert!(args.has_opt("b"));
assert!(args.has_opt("baz"));
assert_eq!(args.opt_param("foo-bar"), "A");
assert_eq!(args.opt_param("c"), "3");
assert_eq!(args.cmd_params(), ["qux"]);
```
*/
pub fn parse<'arg>(tokens: impl IntoIterator<Item = &'arg str>) -> Result<Args, Error> {
    parse_with(tokens, &[])
}

/**
Parse command-line tokens against a set of option schemas.

Each option is resolved to its schema by name or alias (or to a wildcard
schema, if there is one), and the schema decides whether the option consumes
the following token as its parameter. After all the tokens are processed,
options that need a parameter are checked, and absent options with defaults
are filled in. An empty schema set behaves exactly like [`parse`].

The schemas are [validated][schema::validate] before any token is read.
Parsing stops at the first error.

```
use clasp::OptionSchema;

let schemas = [
    OptionSchema::new("baz")
        .with_alias("z")
        .with_parameter(true)
        .with_multi_valued(true),
    OptionSchema::wildcard(),
];

let args = clasp::parse_with(
    ["--foo-bar", "qux", "--baz", "1", "-z=2", "-X", "quux"],
    &schemas,
)
.unwrap();

assert_eq!(args.opt_params("baz"), ["1", "2"]);
assert!(args.has_opt("foo-bar"));
assert!(args.has_opt("X"));
assert_eq!(args.cmd_params(), ["qux", "quux"]);
```
*/
pub fn parse_with<'arg>(
    tokens: impl IntoIterator<Item = &'arg str>,
    schemas: &[OptionSchema],
) -> Result<Args, Error> {
    let result = schema::validate(schemas).and_then(|()| {
        let resolver = Resolver::new(schemas);
        let mut collector = Collector::default();

        load_from_parser(&mut collector, &resolver, ArgumentsParser::new(tokens))?;
        collector.finish(&resolver)
    });

    match result {
        Ok(ref args) => debug!(
            schemas = schemas.len(),
            options = args.options().count(),
            cmd_params = args.cmd_params().len(),
            "parsed command-line tokens"
        ),
        Err(ref error) => debug!(schemas = schemas.len(), %error, "failed to parse command-line tokens"),
    }

    result
}

fn load_from_parser<'arg, 's>(
    collector: &mut Collector<'s>,
    resolver: &Resolver<'s>,
    mut parser: ArgumentsParser<'arg, impl Iterator<Item = &'arg str>>,
) -> Result<(), Error> {
    while let Some(result) = parser.next_arg(Visit {
        collector: &mut *collector,
        resolver,
    }) {
        result??;
    }

    Ok(())
}

/// The in-progress state of a single parse
#[derive(Debug, Default)]
struct Collector<'s> {
    args: Args,

    // Options that resolved to a schema, in the order they were first seen
    observed: Vec<(String, &'s OptionSchema)>,
}

impl<'s> Collector<'s> {
    fn add(&mut self, option: Resolved<'_, 's>, param: Option<&str>) -> Result<(), Error> {
        let name = option.name;

        if let Some(schema) = option.schema {
            if !self.args.has_opt(name) {
                self.observed.push((name.to_owned(), schema));
            }

            if param.is_some() && !schema.is_multi_valued() && !self.args.opt_params(name).is_empty() {
                return Err(Error::OptionIsNotArray {
                    option: name.to_owned(),
                });
            }
        }

        self.args.push_opt_params(name, param);
        Ok(())
    }

    fn finish(mut self, resolver: &Resolver<'s>) -> Result<Args, Error> {
        if let Some((name, _)) = self
            .observed
            .iter()
            .find(|(name, schema)| schema.takes_parameter() && self.args.opt_params(name).is_empty())
        {
            return Err(Error::OptionNeedsParam {
                option: name.clone(),
            });
        }

        for schema in resolver.schemas() {
            if !schema.is_wildcard() && !schema.defaults().is_empty() && !self.args.has_opt(schema.name()) {
                trace!(option = schema.name(), defaults = ?schema.defaults(), "using defaults");
                self.args.push_opt_params(schema.name(), schema.defaults());
            }
        }

        Ok(self.args)
    }
}

/// Visitor that feeds a single classified token into a [`Collector`]
struct Visit<'c, 's> {
    collector: &'c mut Collector<'s>,
    resolver: &'c Resolver<'s>,
}

impl<'c, 's> Visit<'c, 's> {
    /// An option with an inline `=param`
    fn option_with_param(self, option: &str, param: &str) -> Result<(), Error> {
        let resolved = self.resolver.resolve(option)?;
        trace!(option, name = resolved.name, param, "option with inline parameter");

        match resolved.schema {
            Some(schema) if !schema.takes_parameter() => Err(Error::OptionTakesNoParam {
                option: resolved.name.to_owned(),
            }),
            _ => self.collector.add(resolved, Some(param)),
        }
    }

    /// An option that might take the following token as its parameter
    fn option<'arg>(self, option: &'arg str, access: impl ParamAccess<'arg>) -> Result<(), Error> {
        let resolved = self.resolver.resolve(option)?;

        let param = match resolved.schema {
            Some(schema) if schema.takes_parameter() => access.take(),
            _ => None,
        };

        trace!(option, name = resolved.name, param, "option");
        self.collector.add(resolved, param)
    }
}

impl<'arg> Visitor<'arg> for Visit<'_, '_> {
    type Value = Result<(), Error>;

    fn visit_command_param(self, param: &'arg str) -> Self::Value {
        trace!(param, "command parameter");
        self.collector.args.push_cmd_params([param]);
        Ok(())
    }

    fn visit_long_option(self, option: &'arg str, param: &'arg str) -> Self::Value {
        self.option_with_param(option, param)
    }

    fn visit_long(self, option: &'arg str, param: impl ParamAccess<'arg>) -> Self::Value {
        self.option(option, param)
    }

    fn visit_short_option(self, option: &'arg str, param: &'arg str) -> Self::Value {
        self.option_with_param(option, param)
    }

    fn visit_short(self, option: &'arg str, param: impl ParamAccess<'arg>) -> Self::Value {
        self.option(option, param)
    }
}
