//! Synopsis's main application entry point and orchestration logic.
//! Handles command-line argument parsing, template loading, entry collection
//! and output of the generated document.

use std::path::PathBuf;

use synopsis::{
    cli::{get_args, Args},
    config::{load_entries_file, load_entries_from_stdin},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    output::{get_output_file, write_document},
    paths::PathResolver,
    prompt::DialoguerPrompter,
    registry::Registry,
    session::Session,
    template::load_template,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Builds the path resolver from `--base-dir` or the executable's location.
fn get_resolver(base_dir: Option<PathBuf>) -> Result<PathResolver> {
    match base_dir {
        Some(dir) if dir.is_absolute() => Ok(PathResolver::new(dir)),
        Some(dir) => Ok(PathResolver::new(std::env::current_dir().map_err(Error::IoError)?.join(dir))),
        None => PathResolver::from_current_exe(),
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Checks the output file can be written
/// 2. Loads the template and extracts the entry pattern
/// 3. Collects entries from a file, stdin, or the interactive form
/// 4. Renders the document and writes or prints it
fn run(args: Args) -> Result<()> {
    let output_path = match &args.output {
        Some(path) => Some(get_output_file(path, args.force)?),
        None => None,
    };

    let template = load_template(&args.template)?;
    let resolver = get_resolver(args.base_dir)?;
    log::debug!("Resolving relative paths against '{}'.", resolver.base_dir().display());

    let mut registry = Registry::new(template, resolver);

    let entries_file = match (&args.entries, args.stdin) {
        (Some(path), _) => Some(load_entries_file(path)?),
        (None, true) => Some(load_entries_from_stdin()?),
        (None, false) => None,
    };

    match entries_file {
        Some(entries_file) => {
            let count = entries_file.apply(&mut registry, args.relative)?;
            log::info!("Rendered {} entries.", count);
        }
        None => {
            let prompt = DialoguerPrompter::new();
            Session::new(&prompt, &mut registry, args.relative).run()?;
        }
    }

    let document = registry.render_document();
    match output_path {
        Some(path) => {
            write_document(&document, &path)?;
            println!("Document with {} entries written to '{}'.", registry.count(), path.display());
        }
        None => println!("{}", document),
    }
    Ok(())
}
