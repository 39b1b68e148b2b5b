pub mod fairness_note;

pub use fairness_note::FairnessNote;
