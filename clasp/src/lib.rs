/*!
Classify command-line tokens into named options and command parameters,
optionally validated against a declarative set of option schemas.

`clasp` is a parsing engine, not an application framework: it has no I/O and
keeps no state between calls. Give it a list of tokens and it gives back
[`Args`] or the first [`Error`] it found.

- [`parse`] accepts any syntactically valid option, with no configuration.
- [`parse_with`] resolves each option against a list of [`OptionSchema`]s,
  which give it a canonical name, aliases, an [`Arity`], and default
  parameters. A [wildcard][OptionSchema::wildcard] schema accepts anything
  else.
- [`parse_for`] derives the schemas from a type implementing [`Options`],
  usually through [`#[derive(Options)]`][derive@Options], and builds that type
  from the result.

Long options look like `--name` or `--name=param`, where the name is an ASCII
letter followed by letters, digits, and `-`. Short options are single ASCII
letters, and can be combined: `-abc=param` is the same as `-a -b -c=param`.
Everything after a `--` token is a command parameter.

```
use clasp::OptionSchema;

let schemas = [
    OptionSchema::new("output").with_alias("o").with_parameter(true),
    OptionSchema::new("verbose").with_alias("v"),
];

let args = clasp::parse_with(["-vo", "out.txt", "input.txt"], &schemas).unwrap();

assert!(args.has_opt("verbose"));
assert_eq!(args.opt_param("output"), "out.txt");
assert_eq!(args.cmd_params(), ["input.txt"]);
```
*/

pub mod arguments;
mod args;
mod error;
mod impls;
mod options;
pub mod parameter;
mod parse;
pub mod schema;

pub use args::Args;
pub use error::Error;
pub use options::{Options, parse_for};
pub use parse::{parse, parse_with};
pub use schema::{Arity, OptionSchema, WILDCARD};

#[cfg(feature = "derive")]
pub use clasp_derive::Options;
