//! Entry registry and document renderer.
//!
//! The registry owns the extracted template and every entry added so far, keyed by id
//! and kept in insertion order. The full document is re-assembled from scratch on each
//! [`Registry::render_document`] call, so rendering never depends on earlier renders.
use crate::constants::{placeholders, ENTRY_SEPARATOR};
use crate::entry::{Entry, EntryInput};
use crate::error::Result;
use crate::paths::PathResolver;
use crate::template::{Residual, Template};
use indexmap::IndexMap;
use log::debug;

/// Resolved values substituted into the entry pattern for one entry.
#[derive(Debug, Clone, Copy)]
pub struct EntryFields<'a> {
    pub character: &'a str,
    pub id: &'a str,
    pub title: &'a str,
    pub file_path: &'a str,
    pub image_path: &'a str,
    pub synopsis: &'a str,
}

/// Replaces every known token in `text` in a single left-to-right pass.
///
/// Substituted values are never rescanned, so a value that happens to contain a
/// token is written out literally.
fn substitute(text: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(token, _)| tail.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                out.push('[');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Renders one entry by filling the entry pattern's placeholders.
pub fn render_entry(entry_pattern: &str, fields: &EntryFields<'_>) -> String {
    substitute(
        entry_pattern,
        &[
            (placeholders::CHARACTER_NAME, fields.character),
            (placeholders::BOOK_ID, fields.id),
            (placeholders::BOOK_TITLE, fields.title),
            (placeholders::FILE_PATH, fields.file_path),
            (placeholders::IMAGE_PATH, fields.image_path),
            (placeholders::BOOK_SYNOPSIS, fields.synopsis),
        ],
    )
}

/// Fills the shared character placeholder on both sides of the insertion site.
pub fn lock_character(residual: &Residual, character: &str) -> Residual {
    let values = [(placeholders::CHARACTER_NAME, character)];
    Residual {
        before: substitute(&residual.before, &values),
        after: substitute(&residual.after, &values),
    }
}

/// Joins rendered entries and places them at the residual document's insertion site.
pub fn assemble<'a, I>(residual: &Residual, rendered_entries: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = rendered_entries.into_iter().collect::<Vec<_>>().join(ENTRY_SEPARATOR);
    [residual.before.as_str(), joined.as_str(), residual.after.as_str()].concat()
}

/// Keyed, insertion-ordered collection of entries bound to one template.
///
/// All mutation goes through [`add_or_update`](Self::add_or_update),
/// [`remove`](Self::remove) and [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct Registry {
    residual: Residual,
    entry_pattern: String,
    resolver: PathResolver,
    entries: IndexMap<String, Entry>,
    /// Set by the first successful addition; `Some` means the character is locked.
    character: Option<String>,
}

impl Registry {
    pub fn new(template: Template, resolver: PathResolver) -> Self {
        let (residual, entry_pattern) = template.into_parts();
        Self { residual, entry_pattern, resolver, entries: IndexMap::new(), character: None }
    }

    /// Adds a new entry, or replaces the entry with the same id in place.
    ///
    /// The first successful call locks the character: its value is written into the
    /// residual document and later character values are ignored. An updated entry
    /// keeps its original position.
    ///
    /// # Returns
    /// * The number of entries after the call
    ///
    /// # Errors
    /// * `Error::ValidationError` if a required field is empty
    /// * `Error::PathError` if the file or image path cannot be resolved
    ///
    /// On error the registry is left unchanged.
    pub fn add_or_update(&mut self, input: &EntryInput) -> Result<usize> {
        input.validate()?;

        let style = input.path_style();
        let file_path = self.resolver.resolve(&input.file_path, style)?;
        let image_path = self.resolver.resolve(&input.image_path, style)?;

        let character = self.character.as_deref().unwrap_or(&input.character);
        let rendered_html = render_entry(
            &self.entry_pattern,
            &EntryFields {
                character,
                id: &input.id,
                title: &input.title,
                file_path: &file_path,
                image_path: &image_path,
                synopsis: &input.synopsis,
            },
        );

        if self.character.is_none() {
            debug!("Locking character to '{}'.", input.character);
            self.residual = lock_character(&self.residual, &input.character);
            self.character = Some(input.character.clone());
        } else if self.character.as_deref() != Some(input.character.as_str()) {
            debug!("Character is locked; ignoring '{}'.", input.character);
        }

        let entry = Entry {
            character: input.character.clone(),
            id: input.id.clone(),
            title: input.title.clone(),
            file_path,
            image_path,
            synopsis: input.synopsis.clone(),
            rendered_html,
        };

        match self.entries.insert(input.id.clone(), entry) {
            Some(_) => debug!("Updated entry '{}'.", input.id),
            None => debug!("Added entry '{}'.", input.id),
        }

        Ok(self.entries.len())
    }

    /// Removes the entry with `id`, returning it.
    ///
    /// `None` means no such entry exists; that is an ordinary outcome (for example
    /// when nothing was selected) and leaves the registry unchanged.
    pub fn remove(&mut self, id: &str) -> Option<Entry> {
        let removed = self.entries.shift_remove(id);
        match removed {
            Some(_) => debug!("Removed entry '{}'.", id),
            None => debug!("No entry '{}' to remove.", id),
        }
        removed
    }

    /// Clears all entries and unlocks the character.
    ///
    /// The template stays loaded. A character already written into the residual
    /// document is not restored to its placeholder, so after a reset the next
    /// character value has no placeholder left to fill.
    pub fn reset(&mut self) {
        debug!("Resetting registry with {} entries.", self.entries.len());
        self.entries.clear();
        self.character = None;
    }

    /// Assembles the full document from the current entries, in insertion order.
    pub fn render_document(&self) -> String {
        assemble(&self.residual, self.entries.values().map(|entry| entry.rendered_html.as_str()))
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Entry ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// The locked character, if an entry has been added since the last reset.
    pub fn character(&self) -> Option<&str> {
        self.character.as_deref()
    }

    pub fn is_character_locked(&self) -> bool {
        self.character.is_some()
    }

    pub fn residual(&self) -> &Residual {
        &self.residual
    }

    pub fn entry_pattern(&self) -> &str {
        &self.entry_pattern
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_does_not_rescan_values() {
        let out = substitute("[A] [B]", &[("[A]", "[B]"), ("[B]", "b")]);
        assert_eq!(out, "[B] b");
    }

    #[test]
    fn test_substitute_keeps_unknown_brackets() {
        let out = substitute("a[x] [A] [", &[("[A]", "1")]);
        assert_eq!(out, "a[x] 1 [");
    }

    fn residual(before: &str, after: &str) -> Residual {
        Residual { before: before.to_string(), after: after.to_string() }
    }

    #[test]
    fn test_assemble_empty() {
        assert_eq!(assemble(&residual("<p>", "</p>"), Vec::<&str>::new()), "<p></p>");
    }

    #[test]
    fn test_assemble_joins_with_newline() {
        assert_eq!(assemble(&residual("", ""), ["a", "b"]), "a\nb");
    }

    #[test]
    fn test_assemble_ignores_marker_text_in_residual() {
        let residual = residual("<h1>[ENTRIES-HTML]</h1>", "");
        assert_eq!(assemble(&residual, ["a"]), "<h1>[ENTRIES-HTML]</h1>a");
    }

    #[test]
    fn test_lock_character_fills_both_halves() {
        let locked = lock_character(&residual("[CHARACTER-NAME]|", "|[CHARACTER-NAME]"), "Alice");
        assert_eq!(locked, residual("Alice|", "|Alice"));
    }
}
