//! Export the note table for report templates.
//!
//! Templates read notes from a `fairness_info` object of
//! `{ key: { info, source, link } }` and format them client-side.

use faid_core::constants::TEMPLATE_OBJECT_NAME;
use faid_core::traits::INoteStore;
use serde_json::{json, Map, Value};

/// The store as a JSON object keyed by note key.
pub fn to_json(store: &dyn INoteStore) -> Value {
    let mut object = Map::new();
    for key in store.keys() {
        if let Ok(note) = store.get(key) {
            object.insert(
                key.to_string(),
                json!({
                    "info": note.info,
                    "source": note.source,
                    "link": note.link,
                }),
            );
        }
    }
    Value::Object(object)
}

/// `fairness_info = {...};` for an inline `<script>` block.
pub fn render_script(store: &dyn INoteStore) -> String {
    // "</" would close the surrounding script element.
    let body = to_json(store).to_string().replace("</", "<\\/");
    format!("{TEMPLATE_OBJECT_NAME} = {body};\n")
}
