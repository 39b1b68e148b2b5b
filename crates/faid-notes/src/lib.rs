//! # faid-notes
//!
//! Fairness notes for reports: the built-in table, an immutable store,
//! the HTML citation formatter, and export of the table for report templates.

pub mod escape;
pub mod export;
pub mod formatter;
pub mod store;
pub mod table;

pub use formatter::{format_note, get_fairness_info_by_key, NoteFormatter};
pub use store::NoteStore;
