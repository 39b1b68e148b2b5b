// Single source of truth for all default values.

// --- Formatter ---
pub const DEFAULT_LINK_CLASS: &str = "infolink";
pub const DEFAULT_ESCAPE_HTML: bool = false;
