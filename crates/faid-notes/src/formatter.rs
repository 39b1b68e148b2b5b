//! Citation formatter: note text followed by an anchor to the cited work.

use faid_core::config::{defaults, NotesConfig};
use faid_core::errors::{ConfigError, NoteResult};
use faid_core::models::FairnessNote;
use faid_core::traits::INoteStore;
use tracing::debug;

use crate::escape::escape_html;
use crate::store::NoteStore;

/// Formats notes from a store as `"{info}\n <a class='{class}' href='{link}'>{source}</a>"`.
pub struct NoteFormatter<'a> {
    store: &'a dyn INoteStore,
    link_class: String,
    escape_html: bool,
}

impl<'a> NoteFormatter<'a> {
    /// Formatter with default config: `infolink` class, no escaping.
    pub fn new(store: &'a dyn INoteStore) -> Self {
        Self {
            store,
            link_class: defaults::DEFAULT_LINK_CLASS.to_string(),
            escape_html: defaults::DEFAULT_ESCAPE_HTML,
        }
    }

    /// Formatter for `config`. The link class is validated here, since a
    /// config built with `from_toml` or by hand has not been checked yet.
    pub fn with_config(
        store: &'a dyn INoteStore,
        config: &NotesConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            link_class: config.link_class.clone(),
            escape_html: config.escape_html,
        })
    }

    /// Format the note for `key`. A missing key yields `KeyNotFound` and no
    /// output.
    pub fn format(&self, key: &str) -> NoteResult<String> {
        let note = self.store.get(key)?;
        debug!(key, escape_html = self.escape_html, "formatting fairness note");
        Ok(format_note(note, &self.link_class, self.escape_html))
    }

    /// Every note in the store, formatted, in key order.
    pub fn format_all(&self) -> NoteResult<Vec<(String, String)>> {
        self.store
            .keys()
            .into_iter()
            .map(|key| self.format(key).map(|out| (key.to_string(), out)))
            .collect()
    }
}

/// Build the citation string for a single note.
pub fn format_note(note: &FairnessNote, link_class: &str, escape: bool) -> String {
    if escape {
        format!(
            "{}\n <a class='{}' href='{}'>{}</a>",
            escape_html(&note.info),
            escape_html(link_class),
            escape_html(&note.link),
            escape_html(&note.source)
        )
    } else {
        format!(
            "{}\n <a class='{}' href='{}'>{}</a>",
            note.info, link_class, note.link, note.source
        )
    }
}

/// Format a built-in note with the default config.
pub fn get_fairness_info_by_key(key: &str) -> NoteResult<String> {
    NoteFormatter::new(NoteStore::builtin()).format(key)
}
