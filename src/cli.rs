//! Command-line interface implementation for synopsis.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_TEMPLATE_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for synopsis.
#[derive(Parser, Debug)]
#[command(author, version, about = "synopsis: fill an HTML template with book synopsis entries", long_about = None)]
pub struct Args {
    /// Path to the template file containing the entry-begin/entry-end markers
    #[arg(value_name = "TEMPLATE", default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: PathBuf,

    /// File to write the generated document to (printed to stdout when omitted)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// JSON or YAML file with the entries to render (interactive form when omitted)
    #[arg(short, long, value_name = "ENTRIES", conflicts_with = "stdin")]
    pub entries: Option<PathBuf>,

    /// Read the entries document from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Write file and image paths relative to the base directory
    #[arg(short, long)]
    pub relative: bool,

    /// Base directory for relative paths (defaults to the executable's directory)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// Every argument has a default, so only malformed input fails; clap reports it
/// and exits.
pub fn get_args() -> Args {
    Args::parse()
}
