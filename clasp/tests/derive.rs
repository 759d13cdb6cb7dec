use std::net::Ipv4Addr;
use std::path::PathBuf;

use clasp::{Arity, Error, Options, OptionSchema};

#[derive(Options, Debug, PartialEq)]
struct Build {
    /// Where to put the artifacts
    #[clasp(alias = "o", default = "target")]
    out_dir: PathBuf,

    /// Print every step
    #[clasp(alias = "v")]
    verbose: bool,

    #[clasp(long = "include", alias = "I")]
    include_dirs: Vec<String>,

    #[clasp(alias = "j")]
    jobs: Option<u32>,

    bind: Option<Ipv4Addr>,
}

#[test]
fn schemas() {
    let schemas = Build::schemas();

    assert_eq!(
        schemas,
        [
            OptionSchema::new("out-dir")
                .with_arity(Arity::Single)
                .with_alias("o")
                .with_default("target")
                .with_description("Where to put the artifacts"),
            OptionSchema::new("verbose")
                .with_alias("v")
                .with_description("Print every step"),
            OptionSchema::new("include")
                .with_arity(Arity::Multiple)
                .with_alias("I"),
            OptionSchema::new("jobs").with_arity(Arity::Single).with_alias("j"),
            OptionSchema::new("bind").with_arity(Arity::Single),
        ]
    );

    assert!(clasp::schema::validate(&schemas).is_ok());
}

#[test]
fn defaults_and_absent_fields() {
    let (build, args) = clasp::parse_for::<Build>(["src/main.rs"]).unwrap();

    assert_eq!(
        build,
        Build {
            out_dir: PathBuf::from("target"),
            verbose: false,
            include_dirs: Vec::new(),
            jobs: None,
            bind: None,
        }
    );
    assert_eq!(args.cmd_params(), ["src/main.rs"]);
}

#[test]
fn every_field() {
    let (build, args) = clasp::parse_for::<Build>([
        "-vj",
        "4",
        "--out-dir=dist",
        "-I",
        "a",
        "--include",
        "b",
        "--bind",
        "127.0.0.1",
        "--",
        "-v",
    ])
    .unwrap();

    assert_eq!(
        build,
        Build {
            out_dir: PathBuf::from("dist"),
            verbose: true,
            include_dirs: vec!["a".to_owned(), "b".to_owned()],
            jobs: Some(4),
            bind: Some(Ipv4Addr::LOCALHOST),
        }
    );
    assert_eq!(args.cmd_params(), ["-v"]);
}

#[test]
fn unknown_option() {
    assert_eq!(
        clasp::parse_for::<Build>(["--release"]),
        Err(Error::UnconfiguredOption {
            option: "release".to_owned()
        })
    );
}

#[test]
fn invalid_parameter() {
    match clasp::parse_for::<Build>(["-j", "many"]) {
        Err(Error::InvalidParam { option, param, .. }) => {
            assert_eq!(option, "jobs");
            assert_eq!(param, "many");
        }
        other => panic!("expected an invalid parameter, got {other:?}"),
    }
}

#[derive(Options, Debug)]
struct Required {
    name: String,
    count: u8,
}

#[test]
fn required_options() {
    assert_eq!(
        clasp::parse_for::<Required>(["--count=1"]).map(|(required, _)| required.name),
        Err(Error::MissingOption {
            option: "name".to_owned()
        })
    );

    let (required, _) = clasp::parse_for::<Required>(["--name", "x", "--count", "3"]).unwrap();
    assert_eq!(required.name, "x");
    assert_eq!(required.count, 3);
}
