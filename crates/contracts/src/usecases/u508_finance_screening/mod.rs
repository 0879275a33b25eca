pub mod request;
pub mod response;

pub use request::{ColumnMapping, DuplicateMode, Endpoint, TransformOptions, DOWNLOAD_FILE_NAME};
pub use response::PreviewResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct FinanceScreening;

impl UseCaseMetadata for FinanceScreening {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "finance_screening"
    }

    fn display_name() -> &'static str {
        "Finance screening"
    }

    fn description() -> &'static str {
        "Upload a sales workbook, preview the screened rows, download the result or import it"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_index_and_name() {
        assert_eq!(FinanceScreening::full_name(), "u508_finance_screening");
    }
}
