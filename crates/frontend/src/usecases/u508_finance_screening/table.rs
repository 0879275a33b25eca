//! Preview grid model.
//!
//! The table surface never builds cells itself: it displays whatever
//! [`PreviewTable`] it was handed last, so every render fully replaces the
//! previous one.

use serde_json::{Map, Value};

/// Header and body cells of the preview grid, already stringified
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PreviewTable {
    /// True when there is nothing to draw, not even a header
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }
}

/// Build the grid for `columns` x `rows`.
///
/// Column order and row order are kept exactly as given. A cell missing
/// from its row, or null, renders as an empty string.
pub fn render_table(columns: &[String], rows: &[Map<String, Value>]) -> PreviewTable {
    if columns.is_empty() {
        return PreviewTable::default();
    }

    let rows = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.get(column).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();

    PreviewTable {
        header: columns.to_vec(),
        rows,
    }
}

/// Display text of a single JSON cell value
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                Some(f) => number_text(f),
                None => n.to_string(),
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// Whole floats print without the trailing ".0" (1500.0 -> "1500")
fn number_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}
