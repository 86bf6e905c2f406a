//! Wire shapes of a sheet payload.
//!
//! ```json
//! { "table": { "cols": [{ "label": "Name" }], "rows": [{ "c": [{ "v": "Sword" }, null] }] } }
//! ```
//!
//! Every level is optional on the wire; [`super::Grid`] decides what is required.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSheet {
    #[serde(default)]
    pub table: Option<RawTable>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawTable {
    #[serde(default)]
    pub cols: Option<Vec<Option<RawColumn>>>,
    #[serde(default)]
    pub rows: Option<Vec<Option<RawRow>>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawColumn {
    #[serde(default)]
    pub label: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRow {
    #[serde(default)]
    pub c: Option<Vec<Option<RawCell>>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawCell {
    #[serde(default)]
    pub v: serde_json::Value,
}

impl RawColumn {
    /// Trimmed label text; non-string labels are stringified.
    pub fn label_text(&self) -> String {
        match &self.label {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(text) => text.trim().to_string(),
            other => other.to_string().trim().to_string(),
        }
    }
}
