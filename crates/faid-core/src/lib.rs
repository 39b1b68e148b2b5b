//! # faid-core
//!
//! Foundation crate for faid fairness notes.
//! Defines the note record, store trait, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NotesConfig;
pub use errors::{FaidError, FaidResult, NoteError, NoteResult};
pub use models::FairnessNote;
pub use traits::INoteStore;
