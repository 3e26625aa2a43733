//! Synopsis fills an HTML template with book synopsis entries.
//! A template marks one repeatable fragment; the fragment is rendered once per entry
//! and the results are joined back into the template to form a single document.

/// Command-line interface module for the synopsis application
pub mod cli;

/// Entries file handling
/// Supports JSON and YAML entry lists
pub mod config;

/// Marker and placeholder tokens
pub mod constants;

/// Entry data and input validation
pub mod entry;

/// Error types and handling for the synopsis application
pub mod error;

/// Logger initialisation
pub mod logger;

/// Writing the generated document to disk
pub mod output;

/// File and image path to URI conversion
pub mod paths;

/// User input and interaction handling
pub mod prompt;

/// Keyed, ordered entry collection and document rendering
pub mod registry;

/// Interactive editing session
pub mod session;

/// Template loading and entry-region extraction
pub mod template;
