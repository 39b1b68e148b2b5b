pub mod note_store;

pub use note_store::INoteStore;
