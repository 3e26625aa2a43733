//! Synopsis entries and the input record they are built from.

use crate::error::{Error, Result};
use crate::paths::PathStyle;

/// Field values for one entry as supplied by the caller (form or entries file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryInput {
    pub id: String,
    pub character: String,
    pub title: String,
    pub file_path: String,
    pub image_path: String,
    pub synopsis: String,
    pub use_relative_paths: bool,
}

impl EntryInput {
    /// Checks that every required field is filled in.
    ///
    /// # Errors
    /// * `Error::ValidationError` naming the first empty field, in form order
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("character", &self.character),
            ("id", &self.id),
            ("title", &self.title),
            ("file path", &self.file_path),
            ("image path", &self.image_path),
            ("synopsis", &self.synopsis),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(Error::ValidationError { field: *field }),
            None => Ok(()),
        }
    }

    pub fn path_style(&self) -> PathStyle {
        PathStyle::from_relative_flag(self.use_relative_paths)
    }
}

/// One synopsis card held by the registry.
///
/// `rendered_html` is computed when the entry is added or updated and is never
/// re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub character: String,
    pub id: String,
    pub title: String,
    pub file_path: String,
    pub image_path: String,
    pub synopsis: String,
    pub rendered_html: String,
}
