pub mod api;
pub mod controller;
pub mod error;
pub mod table;
pub mod view;

pub use controller::{RawResponse, RequestPayload, Transport, UploadController, UploadView};
pub use error::UploadError;
pub use table::{render_table, PreviewTable};
pub use view::FinanceScreeningPage;
