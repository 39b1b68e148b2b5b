/// faid version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file looked up in the report root.
pub const PROJECT_CONFIG_FILENAME: &str = "faid.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "FAID_LOG";

/// Environment overrides for [`crate::NotesConfig`].
pub const ENV_LINK_CLASS: &str = "FAID_LINK_CLASS";
pub const ENV_ESCAPE_HTML: &str = "FAID_ESCAPE_HTML";

/// Name of the JavaScript object report templates read notes from.
pub const TEMPLATE_OBJECT_NAME: &str = "fairness_info";
