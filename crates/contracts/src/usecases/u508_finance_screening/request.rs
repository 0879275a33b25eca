use serde::{Deserialize, Serialize};

/// File name the transformed workbook is always saved under
pub const DOWNLOAD_FILE_NAME: &str = "finance-screening-output.xlsx";

/// Backend endpoints of the finance screening flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Transform and return the first rows as JSON
    Preview,
    /// Transform and return the workbook bytes
    Transform,
    /// Transform and persist the rows
    TransformImport,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [
        Endpoint::Preview,
        Endpoint::Transform,
        Endpoint::TransformImport,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Preview => "/api/preview",
            Endpoint::Transform => "/api/transform",
            Endpoint::TransformImport => "/api/transform-import",
        }
    }
}

/// Source column header for each canonical field.
///
/// Field order is the serialization order of the `mapping` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub tank_no: String,
    pub item: String,
    pub sale_price: String,
    pub total_value: String,
    pub product_value: String,
    pub tax: String,
    pub com_fn: String,
    pub com: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            tank_no: "เลขตัวถัง".to_string(),
            item: "รายการ".to_string(),
            sale_price: "มูลค่ารวม".to_string(),
            total_value: "มูลค่ารวม".to_string(),
            product_value: "มูลค่าสินค้า".to_string(),
            tax: "ภาษี".to_string(),
            com_fn: "มูลค่าสินค้า".to_string(),
            com: "ภาษี".to_string(),
        }
    }
}

/// How the backend treats rows sharing a tank number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateMode {
    #[default]
    Keep,
    Group,
}

impl DuplicateMode {
    pub const ALL: [DuplicateMode; 2] = [DuplicateMode::Keep, DuplicateMode::Group];

    /// Value sent in `duplicate_mode`
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateMode::Keep => "keep",
            DuplicateMode::Group => "group",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DuplicateMode::Keep => "Keep every row",
            DuplicateMode::Group => "Group rows by tank number",
        }
    }
}

/// Configuration object sent as the `config` part of every request.
///
/// `duplicate_mode` and both labels are taken verbatim from the form,
/// nothing here validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    pub mapping: ColumnMapping,
    pub duplicate_mode: String,
    pub finance_sent_item_label: String,
    pub finance_broker_item_label: String,
}

impl TransformOptions {
    /// Options with the fixed mapping and the given form values
    pub fn from_controls(
        duplicate_mode: impl Into<String>,
        finance_sent_item_label: impl Into<String>,
        finance_broker_item_label: impl Into<String>,
    ) -> Self {
        Self {
            mapping: ColumnMapping::default(),
            duplicate_mode: duplicate_mode.into(),
            finance_sent_item_label: finance_sent_item_label.into(),
            finance_broker_item_label: finance_broker_item_label.into(),
        }
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::from_controls(DuplicateMode::default().as_str(), "ส่งไฟแนนซ์", "นายหน้าไฟแนนซ์")
    }
}
