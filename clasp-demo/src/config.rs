use std::fs;
use std::path::{Path, PathBuf};

use clasp::OptionSchema;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a schema file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read schema file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/**
A set of option schemas loaded from a TOML file, one `[[option]]` table per
schema:

```toml
[[option]]
name = "output"
aliases = ["o"]
takes-parameter = true
description = "Where to write the result"

[[option]]
name = "*"
```

The schemas aren't validated here; that happens when they're used to parse.
*/
#[derive(Debug, Default, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub option: Vec<OptionSchema>,
}

impl SchemaFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use clasp::Arity;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_schemas() {
        let file = write_config(
            r#"
            [[option]]
            name = "include"
            aliases = ["I"]
            takes-parameter = true
            multi-valued = true
            defaults = ["/usr/include"]

            [[option]]
            name = "verbose"
            description = "Say more"

            [[option]]
            name = "*"
            "#,
        );

        let schemas = SchemaFile::load(file.path()).unwrap().option;

        assert_eq!(
            schemas,
            [
                OptionSchema::new("include")
                    .with_alias("I")
                    .with_arity(Arity::Multiple)
                    .with_default("/usr/include"),
                OptionSchema::new("verbose").with_description("Say more"),
                OptionSchema::wildcard(),
            ]
        );

        let args = clasp::parse_with(["-I", "src", "--other"], &schemas).unwrap();
        assert_eq!(args.opt_params("include"), ["src"]);
        assert!(args.has_opt("other"));
    }

    #[test]
    fn empty_file_has_no_schemas() {
        let file = write_config("");
        assert!(SchemaFile::load(file.path()).unwrap().option.is_empty());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = SchemaFile::load(&dir.path().join("nope.toml")).unwrap_err();

        assert!(matches!(error, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file() {
        let file = write_config("[[option]]\naliases = [\"x\"]\n");
        let error = SchemaFile::load(file.path()).unwrap_err();

        assert!(matches!(error, ConfigError::Parse { .. }));
    }
}
