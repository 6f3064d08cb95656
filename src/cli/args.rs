use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// Holds application-wide command line arguments.
pub struct Args {
    /// Root directory for generated output. Defaults to the current
    /// directory.
    #[clap(short, long, parse(from_os_str), value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[clap(short, long, parse(from_occurrences))]
    /// Verbosity of logging, may be repeated.
    pub verbose: u64,

    #[clap(long)]
    /// Treat a class defined twice in one spec as an error.
    pub strict: bool,

    /// Spec file to process. Without it, every spec file under the
    /// conventional subdirectory is processed.
    pub spec: Option<PathBuf>,
}

/// Parses arguments
pub(crate) fn parse_args() -> Args {
    Args::parse()
}
