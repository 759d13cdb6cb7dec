//! Zero-configuration parsing: every syntactically valid option is accepted,
//! and parameters can only be given inline.

use clasp::{Args, Error};

fn parse(tokens: &[&str]) -> Result<Args, Error> {
    clasp::parse(tokens.iter().copied())
}

#[test]
fn no_tokens() {
    let args = parse(&[]).unwrap();

    assert_eq!(args, Args::default());
    assert_eq!(args.options().count(), 0);
    assert!(args.cmd_params().is_empty());
}

#[test]
fn mixed_options() {
    let args = parse(&["--foo-bar=A", "-a", "--baz", "-bc=3", "qux"]).unwrap();

    assert!(args.has_opt("a"));
    assert!(args.has_opt("b"));
    assert!(args.has_opt("c"));
    assert!(args.has_opt("baz"));
    assert_eq!(args.opt_param("foo-bar"), "A");
    assert_eq!(args.opt_param("c"), "3");
    assert!(args.opt_params("a").is_empty());
    assert_eq!(args.cmd_params(), ["qux"]);
}

#[test]
fn command_params_only() {
    let tokens = ["foo", "bar", "", "-", "baz qux"];
    let args = parse(&tokens).unwrap();

    assert_eq!(args.options().count(), 0);
    assert_eq!(args.cmd_params(), tokens);
}

#[test]
fn flags_never_take_the_next_token() {
    let args = parse(&["--foo-bar", "ABC", "-f", "DEF"]).unwrap();

    assert!(args.has_opt("foo-bar"));
    assert!(args.opt_params("foo-bar").is_empty());
    assert!(args.opt_params("f").is_empty());
    assert_eq!(args.cmd_params(), ["ABC", "DEF"]);
}

#[test]
fn inline_params_are_exact() {
    let args = parse(&["--empty=", "--eq=a=b", "--space= x ", "-e="]).unwrap();

    assert!(args.has_opt("empty"));
    assert_eq!(args.opt_params("empty"), [""]);
    assert_eq!(args.opt_param("eq"), "a=b");
    assert_eq!(args.opt_param("space"), " x ");
    assert_eq!(args.opt_params("e"), [""]);
}

#[test]
fn repeated_options_accumulate() {
    let args = parse(&["--foo=1", "--foo", "--foo=2", "-f=3", "-f=4"]).unwrap();

    assert_eq!(args.opt_params("foo"), ["1", "2"]);
    assert_eq!(args.opt_param("foo"), "1");
    assert_eq!(args.opt_params("f"), ["3", "4"]);
}

#[test]
fn cluster_is_independent_short_options() {
    let clustered = parse(&["-abc=x"]).unwrap();
    let separate = parse(&["-a", "-b", "-c=x"]).unwrap();

    assert_eq!(clustered, separate);
    assert!(clustered.opt_params("a").is_empty());
    assert_eq!(clustered.opt_params("c"), ["x"]);
}

#[test]
fn absent_options() {
    let args = parse(&["--foo"]).unwrap();

    assert!(!args.has_opt("bar"));
    assert_eq!(args.opt_param("bar"), "");
    assert!(args.opt_params("bar").is_empty());
}

#[test]
fn terminator() {
    let args = parse(&["-a", "--", "--foo", "-b", "--", "c", "--bad!"]).unwrap();

    assert!(args.has_opt("a"));
    assert!(!args.has_opt("foo"));
    assert!(!args.has_opt("b"));
    assert_eq!(args.cmd_params(), ["--foo", "-b", "--", "c", "--bad!"]);
}

#[test]
fn trailing_terminator() {
    let args = parse(&["x", "--"]).unwrap();
    assert_eq!(args.cmd_params(), ["x"]);
}

#[test]
fn parsing_is_idempotent() {
    let tokens = ["--foo-bar=A", "-a", "--baz", "-bc=3", "qux", "--", "-z"];

    assert_eq!(parse(&tokens).unwrap(), parse(&tokens).unwrap());
}

#[test]
fn invalid_long_options() {
    for (token, option) in [
        ("--1abc", "1abc"),
        ("--foo_bar", "foo_bar"),
        ("--foo!=x", "foo!=x"),
        ("--=x", "=x"),
        ("---", "-"),
        ("--fö", "fö"),
    ] {
        assert_eq!(
            parse(&["--ok", token, "after"]),
            Err(Error::InvalidOption {
                option: option.to_owned()
            }),
            "{token}"
        );
    }
}

#[test]
fn invalid_short_options() {
    for (token, option) in [("-1", "1"), ("-a1", "1"), ("-ab-c", "-"), ("-é", "é")] {
        assert_eq!(
            parse(&[token]),
            Err(Error::InvalidOption {
                option: option.to_owned()
            }),
            "{token}"
        );
    }
}

#[test]
fn error_messages() {
    let error = parse(&["--foo_bar"]).unwrap_err();

    assert_eq!(error.option(), "foo_bar");
    assert!(!error.is_config_error());
    assert_eq!(error.to_string(), r#"invalid option "foo_bar""#);
}
