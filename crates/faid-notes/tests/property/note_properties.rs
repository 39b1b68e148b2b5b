use faid_core::config::NotesConfig;
use faid_core::errors::NoteError;
use faid_core::FairnessNote;
use faid_notes::escape::escape_html;
use faid_notes::{get_fairness_info_by_key, NoteFormatter, NoteStore};
use proptest::prelude::*;

// ── Unknown keys never produce output ─────────────────────────────────────

proptest! {
    #[test]
    fn unknown_key_is_not_found(key in ".{0,40}") {
        prop_assume!(key != "hardware");
        let result = get_fairness_info_by_key(&key);
        prop_assert_eq!(result, Err(NoteError::KeyNotFound { key: key.clone() }));
    }
}

// ── Formatting is pure ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn formatting_is_idempotent(
        info in "[ -~]{1,80}",
        source in "[ -~]{1,40}",
        path in "[a-z0-9/]{0,20}",
        escape in any::<bool>()
    ) {
        prop_assume!(!info.trim().is_empty() && !source.trim().is_empty());
        let note = FairnessNote::new("k", info, source, format!("https://example.org/{path}"));
        let store = NoteStore::from_notes([note]).unwrap();
        let config = NotesConfig { escape_html: escape, ..NotesConfig::default() };
        let formatter = NoteFormatter::with_config(&store, &config).unwrap();
        let first = formatter.format("k").unwrap();
        let second = formatter.format("k").unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unescaped_output_embeds_fields_verbatim(
        info in "[ -~]{1,80}",
        source in "[ -~]{1,40}"
    ) {
        prop_assume!(!info.trim().is_empty() && !source.trim().is_empty());
        let note = FairnessNote::new("k", info.clone(), source.clone(), "https://example.org");
        let store = NoteStore::from_notes([note]).unwrap();
        let out = NoteFormatter::new(&store).format("k").unwrap();
        prop_assert_eq!(
            out,
            format!("{info}\n <a class='infolink' href='https://example.org'>{source}</a>")
        );
    }
}

// ── Escaping leaves no raw markup ─────────────────────────────────────────

proptest! {
    #[test]
    fn escaped_text_has_no_markup_chars(text in ".{0,100}") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
    }

    #[test]
    fn escaped_ampersands_only_start_entities(text in ".{0,100}") {
        let escaped = escape_html(&text);
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            prop_assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#x27;"]
                    .iter()
                    .any(|entity| rest.starts_with(entity)),
                "raw '&' at {} in {:?}",
                i,
                escaped
            );
        }
    }
}
