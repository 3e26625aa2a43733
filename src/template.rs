//! Template loading and entry-region extraction.
//!
//! A template is an ordinary HTML file in which one repeatable fragment is wrapped in
//! `<!-- entry-begin -->` / `<!-- entry-end -->`. Extraction splits it into the
//! fragment (the entry pattern) and the rest of the file with the region collapsed to
//! a single `[ENTRIES-HTML]` marker (the residual document).
use crate::constants::{ENTRIES_MARKER, ENTRY_BEGIN_MARKER, ENTRY_END_MARKER};
use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;

/// The template text around the entry region.
///
/// The insertion site is kept as the split point between `before` and `after`
/// rather than as a token in the text, so nothing substituted into either half can
/// create a second insertion site. `Display` writes the `[ENTRIES-HTML]` marker at
/// the split point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residual {
    pub before: String,
    pub after: String,
}

impl fmt::Display for Residual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.before, ENTRIES_MARKER, self.after)
    }
}

/// A template split into its residual document and entry pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    residual: Residual,
    entry_pattern: String,
}

impl Template {
    /// Extracts the entry pattern from raw template text.
    ///
    /// Only the first `begin ... end` region is honoured. Templates with several
    /// repeatable regions are not supported; later regions are left in the residual
    /// document untouched.
    ///
    /// # Errors
    /// * `Error::TemplateFormatError` if the markers are missing, or if the template
    ///   already contains the insertion marker
    pub fn extract(raw_template: &str) -> Result<Self> {
        if raw_template.contains(ENTRIES_MARKER) {
            return Err(Error::TemplateFormatError(format!(
                "template must not contain the reserved token {ENTRIES_MARKER}"
            )));
        }

        let region = Regex::new(&format!(
            "(?s){}(.*?){}",
            regex::escape(ENTRY_BEGIN_MARKER),
            regex::escape(ENTRY_END_MARKER)
        ))
        .map_err(|e| Error::TemplateFormatError(e.to_string()))?;

        let captures = region.captures(raw_template).ok_or_else(|| {
            Error::TemplateFormatError(format!(
                "no {ENTRY_BEGIN_MARKER} ... {ENTRY_END_MARKER} region found"
            ))
        })?;

        // Group 0 always exists on a match; group 1 always participates.
        let (whole, pattern) = match (captures.get(0), captures.get(1)) {
            (Some(whole), Some(pattern)) => (whole, pattern),
            _ => {
                return Err(Error::TemplateFormatError(
                    "entry region could not be captured".to_string(),
                ))
            }
        };

        let residual = Residual {
            before: raw_template[..whole.start()].to_string(),
            after: raw_template[whole.end()..].to_string(),
        };

        debug!(
            "Extracted entry pattern of {} bytes at offset {}.",
            pattern.len(),
            whole.start()
        );

        Ok(Self { residual, entry_pattern: pattern.as_str().to_string() })
    }

    /// The template with the entry region cut out.
    pub fn residual(&self) -> &Residual {
        &self.residual
    }

    /// The fragment found between the entry markers.
    pub fn entry_pattern(&self) -> &str {
        &self.entry_pattern
    }

    /// Splits the template back into `(residual, entry_pattern)`.
    pub fn into_parts(self) -> (Residual, String) {
        (self.residual, self.entry_pattern)
    }
}

/// Reads a template file and extracts it.
///
/// # Errors
/// * `Error::TemplateDoesNotExistsError` if the file is missing
/// * `Error::IoError` if it cannot be read as UTF-8 text
/// * `Error::TemplateFormatError` if the entry markers are missing
pub fn load_template<P: AsRef<Path>>(template_path: P) -> Result<Template> {
    let template_path = template_path.as_ref();
    if !template_path.is_file() {
        return Err(Error::TemplateDoesNotExistsError {
            template_path: template_path.display().to_string(),
        });
    }

    debug!("Loading template from '{}'.", template_path.display());
    let raw_template = fs::read_to_string(template_path).map_err(Error::IoError)?;
    Template::extract(&raw_template)
}
