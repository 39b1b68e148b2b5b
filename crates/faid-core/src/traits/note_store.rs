use crate::errors::NoteResult;
use crate::models::FairnessNote;

/// Read-only fairness note lookup.
///
/// Implementations are built once and never mutated afterwards, so any
/// number of readers may share one without coordination.
pub trait INoteStore: Send + Sync {
    /// Look up the note for `key`, or `NoteError::KeyNotFound`.
    fn get(&self, key: &str) -> NoteResult<&FairnessNote>;

    /// All keys, sorted.
    fn keys(&self) -> Vec<&str>;

    /// Existence check. Implementations that log misses in `get` should
    /// override this so probing for a key stays quiet.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
