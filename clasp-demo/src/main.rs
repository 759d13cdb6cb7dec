mod config;

use std::env;
use std::path::Path;

use anyhow::Context as _;
use clasp::{Args, Options, arguments::LoadedArguments};
use lazy_format::lazy_format;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::SchemaFile;

#[derive(Options, Debug)]
struct DemoOptions {
    /// Where to write the output
    #[clasp(alias = "o", default = "-")]
    output: String,

    /// Print more information
    #[clasp(alias = "v")]
    verbose: bool,

    /// Directories to search, in order
    #[clasp(long = "include", alias = "I")]
    include_dirs: Vec<String>,

    /// How many jobs to run at once
    #[clasp(alias = "j")]
    jobs: Option<u32>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CLASP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_args(args: &Args) {
    let options = lazy_format!("  --{name} {params:?}\n" for (name, params) in args.options());

    print!("options:\n{options}");
    println!("command parameters: {:?}", args.cmd_params());
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let arguments = LoadedArguments::from_env().context("failed to load process arguments")?;

    match env::var_os("CLASP_SCHEMAS") {
        Some(path) => {
            let path = Path::new(&path);
            debug!(path = %path.display(), "loading option schemas");

            let schemas = SchemaFile::load(path)?.option;
            for schema in &schemas {
                debug!(%schema, "configured option");
            }

            let args = arguments
                .parse_with(&schemas)
                .with_context(|| format!("{}: failed to parse arguments", arguments.program_name()))?;

            print_args(&args);
        }
        None => {
            let (options, args) = arguments
                .parse_for::<DemoOptions>()
                .with_context(|| format!("{}: failed to parse arguments", arguments.program_name()))?;

            println!("{options:#?}");
            print_args(&args);
        }
    }

    Ok(())
}
