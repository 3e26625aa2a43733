//! Interactive editing session.
//! Drives a [`Registry`] through a [`Prompter`] the way the entry form does:
//! add or update, remove, view, start over, finish.

use crate::error::{Error, Result};
use crate::prompt::{Action, Prompter};
use crate::registry::Registry;
use log::{debug, warn};

pub struct Session<'a> {
    prompt: &'a dyn Prompter,
    registry: &'a mut Registry,
    use_relative_paths: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        prompt: &'a dyn Prompter,
        registry: &'a mut Registry,
        use_relative_paths: bool,
    ) -> Self {
        Self { prompt, registry, use_relative_paths }
    }

    /// Runs the menu loop until the user picks [`Action::Finish`].
    ///
    /// Validation and path errors are shown to the user and the loop continues;
    /// only prompt failures end the session early.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let action = self.prompt.select_action(self.registry.count())?;
            debug!("Session action: {:?}", action);

            match action {
                Action::AddOrUpdate => self.add_or_update()?,
                Action::Remove => self.remove()?,
                Action::ViewHtml => self.prompt.show(&self.registry.render_document()),
                Action::NewDocument => self.new_document()?,
                Action::Finish => return Ok(()),
            }
        }
    }

    fn add_or_update(&mut self) -> Result<()> {
        let input =
            self.prompt.entry_form(self.registry.character(), self.use_relative_paths)?;
        self.use_relative_paths = input.use_relative_paths;

        match self.registry.add_or_update(&input) {
            Ok(count) => {
                self.prompt.show(&format!("Entry '{}' saved ({} total).", input.id, count));
                Ok(())
            }
            Err(e @ (Error::ValidationError { .. } | Error::PathError(_))) => {
                warn!("{}", e);
                self.prompt.show(&e.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn remove(&mut self) -> Result<()> {
        let ids: Vec<String> = self.registry.ids().map(str::to_string).collect();
        let removed = self
            .prompt
            .select_entry(&ids)?
            .and_then(|id| self.registry.remove(&id));

        match removed {
            Some(entry) => self.prompt.show(&format!("Entry '{}' removed.", entry.id)),
            None => self.prompt.show("No entry removed."),
        }
        Ok(())
    }

    fn new_document(&mut self) -> Result<()> {
        if self.registry.is_empty() {
            self.registry.reset();
            return Ok(());
        }

        let prompt = format!("Discard {} entries and start over?", self.registry.count());
        if self.prompt.confirm(prompt)? {
            self.registry.reset();
            self.prompt.show("Started a new document.");
        }
        Ok(())
    }
}
