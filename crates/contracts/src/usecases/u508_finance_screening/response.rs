use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Successful body of `POST /api/preview`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// Transformation statistics, rendered verbatim
    #[serde(default)]
    pub stats: Option<Value>,

    #[serde(default)]
    pub columns: Vec<String>,

    /// One map per row keyed by column name; cells may be null or missing
    #[serde(default)]
    pub rows: Vec<Map<String, Value>>,

    /// Validation notes from the rules engine
    #[serde(default)]
    pub issues: Vec<String>,
}
