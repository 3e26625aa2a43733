//! User input and interaction handling.
//! The [`Prompter`] trait is everything the interactive session needs from a
//! terminal; [`DialoguerPrompter`] implements it with dialoguer widgets.

use crate::entry::EntryInput;
use crate::error::{Error, Result};
use dialoguer::{Confirm, FuzzySelect, Input, Select};

/// Menu actions offered by the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddOrUpdate,
    Remove,
    ViewHtml,
    NewDocument,
    Finish,
}

impl Action {
    pub const ALL: [Action; 5] =
        [Action::AddOrUpdate, Action::Remove, Action::ViewHtml, Action::NewDocument, Action::Finish];

    pub fn label(&self) -> &'static str {
        match self {
            Action::AddOrUpdate => "Add or update entry",
            Action::Remove => "Remove entry",
            Action::ViewHtml => "View HTML",
            Action::NewDocument => "New document",
            Action::Finish => "Finish",
        }
    }
}

/// Terminal interaction used by [`crate::session::Session`].
pub trait Prompter {
    /// Asks which action to perform next.
    fn select_action(&self, entry_count: usize) -> Result<Action>;

    /// Asks for the fields of one entry.
    ///
    /// # Arguments
    /// * `character` - The locked character, if any, offered as the default
    /// * `use_relative_paths` - Default for the relative paths question
    fn entry_form(&self, character: Option<&str>, use_relative_paths: bool) -> Result<EntryInput>;

    /// Asks which entry to remove. `None` means nothing was selected.
    fn select_entry(&self, ids: &[String]) -> Result<Option<String>>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: String) -> Result<bool>;

    /// Shows a message or the generated document to the user.
    fn show(&self, text: &str);
}

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::PromptError(e.to_string())
}

/// Prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn text(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }
}

impl Prompter for DialoguerPrompter {
    fn select_action(&self, entry_count: usize) -> Result<Action> {
        let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
        let selection = Select::new()
            .with_prompt(format!("{} entries", entry_count))
            .default(0)
            .items(&labels)
            .interact()
            .map_err(prompt_error)?;

        Ok(Action::ALL[selection])
    }

    fn entry_form(&self, character: Option<&str>, use_relative_paths: bool) -> Result<EntryInput> {
        Ok(EntryInput {
            character: self.text("Character", character)?,
            id: self.text("ID", None)?,
            title: self.text("Title", None)?,
            file_path: self.text("File", None)?,
            image_path: self.text("Image", None)?,
            synopsis: self.text("Synopsis", None)?,
            use_relative_paths: Confirm::new()
                .with_prompt("Use relative paths?")
                .default(use_relative_paths)
                .interact()
                .map_err(prompt_error)?,
        })
    }

    fn select_entry(&self, ids: &[String]) -> Result<Option<String>> {
        if ids.is_empty() {
            return Ok(None);
        }

        let selection = FuzzySelect::new()
            .with_prompt("Entry to remove")
            .items(ids)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(selection.and_then(|index| ids.get(index).cloned()))
    }

    fn confirm(&self, prompt: String) -> Result<bool> {
        Confirm::new().with_prompt(prompt).default(false).interact().map_err(prompt_error)
    }

    fn show(&self, text: &str) {
        println!("{}", text);
    }
}
