//! NoteStore: immutable key → note map, implements INoteStore.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use faid_core::config::NotesConfig;
use faid_core::errors::{NoteError, NoteResult};
use faid_core::models::FairnessNote;
use faid_core::traits::INoteStore;
use tracing::{debug, info, warn};

use crate::table;

static BUILTIN: LazyLock<NoteStore> = LazyLock::new(NoteStore::from_table);

/// Fairness notes keyed by note key. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: BTreeMap<String, FairnessNote>,
}

impl NoteStore {
    /// The process-wide store holding the built-in table.
    pub fn builtin() -> &'static NoteStore {
        &BUILTIN
    }

    /// Built-in table plus the config's `extra_notes`.
    ///
    /// Extra notes must validate and may not reuse an existing key.
    pub fn with_config(config: &NotesConfig) -> NoteResult<Self> {
        let extras = config
            .extra_notes
            .iter()
            .map(|(key, entry)| entry.clone().into_note(key.as_str()));
        Self::builtin().extended(extras)
    }

    /// Build a store from arbitrary notes, without the built-in table.
    pub fn from_notes(notes: impl IntoIterator<Item = FairnessNote>) -> NoteResult<Self> {
        let empty = Self {
            notes: BTreeMap::new(),
        };
        empty.extended(notes)
    }

    /// Iterate notes in key order.
    pub fn iter(&self) -> impl Iterator<Item = &FairnessNote> {
        self.notes.values()
    }

    fn extended(&self, notes: impl IntoIterator<Item = FairnessNote>) -> NoteResult<Self> {
        let mut map = self.notes.clone();
        for note in notes {
            if let Err(e) = note.validate() {
                warn!(key = %note.key, error = %e, "rejected fairness note");
                return Err(e);
            }
            if map.contains_key(&note.key) {
                warn!(key = %note.key, "duplicate fairness note key");
                return Err(NoteError::DuplicateKey { key: note.key });
            }
            map.insert(note.key.clone(), note);
        }
        info!(notes = map.len(), "fairness note store built");
        Ok(Self { notes: map })
    }

    fn from_table() -> Self {
        let notes = table::all_notes()
            .iter()
            .map(|n| {
                (
                    n.key.to_string(),
                    FairnessNote::new(n.key, n.info, n.source, n.link),
                )
            })
            .collect::<BTreeMap<_, _>>();
        info!(notes = notes.len(), "built-in fairness notes loaded");
        Self { notes }
    }
}

impl INoteStore for NoteStore {
    fn get(&self, key: &str) -> NoteResult<&FairnessNote> {
        match self.notes.get(key) {
            Some(note) => {
                debug!(key, "fairness note hit");
                Ok(note)
            }
            None => {
                warn!(key, "fairness note miss");
                Err(NoteError::KeyNotFound {
                    key: key.to_string(),
                })
            }
        }
    }

    fn keys(&self) -> Vec<&str> {
        self.notes.keys().map(String::as_str).collect()
    }

    fn contains(&self, key: &str) -> bool {
        self.notes.contains_key(key)
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}
