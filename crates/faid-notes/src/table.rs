//! The built-in fairness note table.

/// A compiled-in fairness note.
pub struct BuiltinNote {
    pub key: &'static str,
    pub info: &'static str,
    pub source: &'static str,
    pub link: &'static str,
}

// ── Hardware ───────────────────────────────────────────────────────────────
pub static HARDWARE: BuiltinNote = BuiltinNote {
    key: "hardware",
    info: "An ML model with the same parameters (random seeds, epochs, batch-size) on different hardware can have different performance results, especially for minority groups. This is due to (1) variations in gradient flows across groups, and (2) differences in local loss surfaces.",
    source: "Nelaturu et al. On The Fairness Impacts of Hardware Selection in Machine Learning. 2023.",
    link: "https://arxiv.org/abs/2312.03886",
};

/// All built-in notes.
pub fn all_notes() -> &'static [&'static BuiltinNote] {
    static ALL: &[&BuiltinNote] = &[&HARDWARE];
    ALL
}
