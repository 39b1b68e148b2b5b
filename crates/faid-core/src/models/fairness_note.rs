use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{NoteError, NoteResult};

static RE_HTTP_URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s'<>]+$").ok());

/// An explanatory text with a citation describing a known source of
/// unfairness in ML model evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FairnessNote {
    /// Lookup key (e.g., "hardware").
    pub key: String,
    /// Human-readable explanation.
    pub info: String,
    /// Citation text: authors, title, year.
    pub source: String,
    /// URL of the cited work.
    pub link: String,
}

impl FairnessNote {
    pub fn new(
        key: impl Into<String>,
        info: impl Into<String>,
        source: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            info: info.into(),
            source: source.into(),
            link: link.into(),
        }
    }

    /// Check that every field is populated and the link is an absolute
    /// http(s) URL.
    pub fn validate(&self) -> NoteResult<()> {
        for (field, value) in [
            ("key", &self.key),
            ("info", &self.info),
            ("source", &self.source),
            ("link", &self.link),
        ] {
            if value.trim().is_empty() {
                return Err(NoteError::InvalidNote {
                    key: self.key.clone(),
                    field,
                });
            }
        }
        if !is_http_url(&self.link) {
            return Err(NoteError::InvalidLink {
                key: self.key.clone(),
                link: self.link.clone(),
            });
        }
        Ok(())
    }
}

fn is_http_url(link: &str) -> bool {
    match RE_HTTP_URL.as_ref() {
        Some(re) => re.is_match(link),
        None => link.starts_with("https://") || link.starts_with("http://"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(link: &str) -> FairnessNote {
        FairnessNote::new("k", "info", "source", link)
    }

    #[test]
    fn accepts_https_and_http_links() {
        assert!(note("https://arxiv.org/abs/2312.03886").validate().is_ok());
        assert!(note("http://example.org/paper").validate().is_ok());
    }

    #[test]
    fn rejects_relative_and_scriptlike_links() {
        for link in ["arxiv.org/abs/1", "javascript:alert(1)", "https://a b", "https://x'y"] {
            assert!(
                matches!(note(link).validate(), Err(NoteError::InvalidLink { .. })),
                "link {link} should be rejected"
            );
        }
    }

    #[test]
    fn reports_first_empty_field() {
        let n = FairnessNote::new("k", "info", "  ", "https://x.org");
        assert_eq!(
            n.validate(),
            Err(NoteError::InvalidNote {
                key: "k".into(),
                field: "source"
            })
        );
    }
}
