pub mod defaults;
pub mod notes_config;

pub use notes_config::{NoteEntry, NotesConfig};
