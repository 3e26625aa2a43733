//! Error handling for the synopsis application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for synopsis operations.
///
/// This enum represents all possible errors that can occur within the application.
/// Removing an unknown entry is not an error; see [`crate::registry::Registry::remove`].
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The template file could not be found
    #[error("Template file missing: '{template_path}'. Please add a template file or pass its path.")]
    TemplateDoesNotExistsError { template_path: String },

    /// The template text lacks the entry markers or is otherwise unusable.
    /// Fatal: no entry can be rendered without a valid template.
    #[error("Template format error: {0}.")]
    TemplateFormatError(String),

    /// A required entry field was left empty
    #[error("Validation error: '{field}' is required.")]
    ValidationError { field: &'static str },

    /// A file or image path could not be turned into a URI
    #[error("Path error: {0}.")]
    PathError(String),

    /// Represents errors that occur while reading an entries file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The output file exists and overwriting was not requested
    #[error("Output file '{output_path}' already exists. Use --force to overwrite it.")]
    OutputFileExistsError { output_path: String },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
